// ABOUTME: Master food library with regional availability and nutrition facts
// ABOUTME: Source data for the deterministic local diet-plan generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Master Food Library
//!
//! Region-tagged staple foods with per-serving nutrition facts. Entries
//! carry a `vegetarian` flag so the fallback generator can honor the
//! Vegetarian preference; the flag is library metadata and is not part of
//! the diet-plan payload shape.

use crate::models::{FoodCategory, FoodItem, Region};

/// A food library entry: payload fields plus library-only metadata
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodEntry {
    /// Stable item identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Serving description
    pub serving: &'static str,
    /// Calories per serving (kcal)
    pub calories: f64,
    /// Protein per serving (g)
    pub protein: f64,
    /// Carbohydrates per serving (g)
    pub carbs: f64,
    /// Fat per serving (g)
    pub fats: f64,
    /// Item category
    pub category: FoodCategory,
    /// Regions where the item is a common, affordable staple
    pub regions: &'static [Region],
    /// Contains no meat or fish
    pub vegetarian: bool,
}

impl FoodEntry {
    /// Whether this entry is a staple in the given region
    #[must_use]
    pub fn available_in(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }
}

impl From<&FoodEntry> for FoodItem {
    fn from(entry: &FoodEntry) -> Self {
        Self {
            id: entry.id.to_owned(),
            name: entry.name.to_owned(),
            serving: entry.serving.to_owned(),
            calories: entry.calories,
            protein: entry.protein,
            carbs: entry.carbs,
            fats: entry.fats,
            category: entry.category,
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn entry(
    id: &'static str,
    name: &'static str,
    serving: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    category: FoodCategory,
    regions: &'static [Region],
    vegetarian: bool,
) -> FoodEntry {
    FoodEntry {
        id,
        name,
        serving,
        calories,
        protein,
        carbs,
        fats,
        category,
        regions,
        vegetarian,
    }
}

const SOUTH_ASIA: &[Region] = &[Region::SouthAsia];
const WESTERN: &[Region] = &[Region::Western];
const MIDDLE_EAST: &[Region] = &[Region::MiddleEast];
const EAST_ASIA: &[Region] = &[Region::EastAsia];
const WESTERN_GLOBAL: &[Region] = &[Region::Western, Region::Global];
const EAST_ASIA_GLOBAL: &[Region] = &[Region::EastAsia, Region::Global];
const EVERYWHERE: &[Region] = &[
    Region::Global,
    Region::SouthAsia,
    Region::Western,
    Region::MiddleEast,
    Region::EastAsia,
];

/// All known staple foods, grouped by primary region
pub const MASTER_FOOD_LIBRARY: &[FoodEntry] = &[
    // South Asia (Bangladesh, India, Pakistan, Sri Lanka)
    entry("sa-rice-1", "Basmati Rice", "1 cup", 210.0, 4.5, 46.0, 0.5, FoodCategory::Carb, SOUTH_ASIA, true),
    entry("sa-roti-1", "Whole Wheat Roti", "1 medium", 110.0, 4.0, 22.0, 0.4, FoodCategory::Carb, SOUTH_ASIA, true),
    entry("sa-dal-1", "Masoor Dal", "1 cup", 230.0, 18.0, 40.0, 1.0, FoodCategory::Protein, SOUTH_ASIA, true),
    entry("sa-paneer-1", "Paneer Curry", "100g", 260.0, 18.0, 4.0, 20.0, FoodCategory::Protein, SOUTH_ASIA, true),
    entry("sa-chicken-1", "Chicken Bhuna", "100g", 170.0, 28.0, 2.0, 6.0, FoodCategory::Protein, SOUTH_ASIA, false),
    entry("sa-fish-1", "River Fish Curry", "100g", 140.0, 22.0, 0.0, 5.0, FoodCategory::Protein, SOUTH_ASIA, false),
    entry("sa-veg-1", "Aloo Gobi", "1 cup", 120.0, 3.0, 18.0, 5.0, FoodCategory::Veg, SOUTH_ASIA, true),
    entry("sa-veg-2", "Palak Paneer", "1 cup", 190.0, 12.0, 8.0, 14.0, FoodCategory::Veg, SOUTH_ASIA, true),
    entry("sa-fruit-1", "Mango", "1 medium", 150.0, 1.0, 35.0, 0.5, FoodCategory::Fruit, SOUTH_ASIA, true),
    // Western (USA, Canada, UK, EU, Australia, Brazil)
    entry("we-oats-1", "Rolled Oats", "1 cup", 160.0, 6.0, 28.0, 3.0, FoodCategory::Carb, WESTERN, true),
    entry("we-bread-1", "Sourdough Bread", "2 slices", 180.0, 8.0, 36.0, 1.0, FoodCategory::Carb, WESTERN, true),
    entry("we-pasta-1", "Spaghetti", "1 cup", 220.0, 8.0, 43.0, 1.3, FoodCategory::Carb, WESTERN, true),
    entry("we-chicken-1", "Grilled Chicken Breast", "100g", 165.0, 31.0, 0.0, 3.6, FoodCategory::Protein, WESTERN_GLOBAL, false),
    entry("we-beef-1", "Lean Ground Beef", "100g", 250.0, 26.0, 0.0, 15.0, FoodCategory::Protein, WESTERN, false),
    entry("we-salmon-1", "Baked Salmon", "100g", 200.0, 22.0, 0.0, 12.0, FoodCategory::Protein, WESTERN, false),
    entry("we-veg-1", "Steamed Broccoli", "1 cup", 55.0, 4.0, 11.0, 0.6, FoodCategory::Veg, WESTERN_GLOBAL, true),
    entry("we-veg-2", "Mixed Greens Salad", "2 cups", 40.0, 2.0, 6.0, 1.0, FoodCategory::Veg, WESTERN_GLOBAL, true),
    entry("we-fruit-1", "Blueberries", "1 cup", 85.0, 1.0, 21.0, 0.5, FoodCategory::Fruit, WESTERN, true),
    // Middle East (UAE, Saudi Arabia)
    entry("me-pita-1", "Pita Bread", "1 large", 165.0, 5.0, 33.0, 1.0, FoodCategory::Carb, MIDDLE_EAST, true),
    entry("me-hummus-1", "Hummus", "0.25 cup", 100.0, 5.0, 10.0, 6.0, FoodCategory::Protein, MIDDLE_EAST, true),
    entry("me-lamb-1", "Lamb Kebab", "100g", 230.0, 24.0, 1.0, 14.0, FoodCategory::Protein, MIDDLE_EAST, false),
    entry("me-veg-1", "Tabbouleh", "1 cup", 140.0, 3.0, 15.0, 9.0, FoodCategory::Veg, MIDDLE_EAST, true),
    entry("me-fruit-1", "Dates", "3 pieces", 200.0, 1.5, 54.0, 0.3, FoodCategory::Fruit, MIDDLE_EAST, true),
    // East Asia (China, Japan, Singapore)
    entry("ea-rice-1", "Jasmine Rice", "1 cup", 205.0, 4.0, 45.0, 0.4, FoodCategory::Carb, EAST_ASIA, true),
    entry("ea-noodles-1", "Egg Noodles", "1 cup", 220.0, 7.0, 40.0, 3.0, FoodCategory::Carb, EAST_ASIA, true),
    entry("ea-tofu-1", "Steamed Tofu", "100g", 80.0, 8.0, 2.0, 5.0, FoodCategory::Protein, EAST_ASIA_GLOBAL, true),
    entry("ea-chicken-1", "Stir-fry Chicken", "100g", 180.0, 25.0, 5.0, 7.0, FoodCategory::Protein, EAST_ASIA, false),
    entry("ea-veg-1", "Bok Choy", "1 cup", 20.0, 2.0, 3.0, 0.2, FoodCategory::Veg, EAST_ASIA, true),
    entry("ea-fruit-1", "Lychee", "10 pieces", 65.0, 1.0, 16.0, 0.4, FoodCategory::Fruit, EAST_ASIA, true),
    // Global staples, available everywhere
    entry("gl-egg-1", "Boiled Egg", "1 large", 78.0, 6.0, 0.6, 5.0, FoodCategory::Protein, EVERYWHERE, true),
    entry("gl-banana-1", "Banana", "1 medium", 105.0, 1.3, 27.0, 0.3, FoodCategory::Fruit, EVERYWHERE, true),
    entry("gl-apple-1", "Apple", "1 medium", 95.0, 0.5, 25.0, 0.3, FoodCategory::Fruit, EVERYWHERE, true),
];

/// Entries available in a region, in library order
///
/// Global staples are always included; `vegetarian_only` additionally
/// filters out meat and fish.
pub fn entries_for_region(
    region: Region,
    vegetarian_only: bool,
) -> impl Iterator<Item = &'static FoodEntry> {
    MASTER_FOOD_LIBRARY.iter().filter(move |entry| {
        (entry.available_in(region) || entry.available_in(Region::Global))
            && (!vegetarian_only || entry.vegetarian)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_ids_are_unique() {
        let mut ids: Vec<&str> = MASTER_FOOD_LIBRARY.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MASTER_FOOD_LIBRARY.len());
    }

    #[test]
    fn test_regional_filter_includes_global_staples() {
        let items: Vec<_> = entries_for_region(Region::SouthAsia, false).collect();
        assert!(items.iter().any(|e| e.id == "sa-rice-1"));
        assert!(items.iter().any(|e| e.id == "gl-banana-1"));
        assert!(!items.iter().any(|e| e.id == "we-beef-1"));
    }

    #[test]
    fn test_vegetarian_filter_excludes_meat_and_fish() {
        let items: Vec<_> = entries_for_region(Region::Western, true).collect();
        assert!(!items.iter().any(|e| e.id == "we-chicken-1"));
        assert!(!items.iter().any(|e| e.id == "we-salmon-1"));
        assert!(items.iter().any(|e| e.id == "we-oats-1"));
        assert!(items.iter().any(|e| e.id == "gl-egg-1"));
    }

    #[test]
    fn test_every_region_has_a_vegetarian_protein() {
        for region in [
            Region::SouthAsia,
            Region::Western,
            Region::MiddleEast,
            Region::EastAsia,
            Region::Global,
        ] {
            assert!(
                entries_for_region(region, true)
                    .any(|e| e.category == FoodCategory::Protein),
                "{region:?} lacks a vegetarian protein source"
            );
        }
    }

    #[test]
    fn test_entry_converts_to_payload_item() {
        let item = FoodItem::from(&MASTER_FOOD_LIBRARY[0]);
        assert_eq!(item.id, "sa-rice-1");
        assert_eq!(item.category, FoodCategory::Carb);
        assert!((item.calories - 210.0).abs() < f64::EPSILON);
    }
}

// ABOUTME: Deterministic offline plan generator built on the static food library
// ABOUTME: Default payload used when the content collaborator is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Local Fallback Generator
//!
//! Assembles a diet plan from the static food library, filtered by the
//! profile's region and diet preference. Selection is deterministic
//! (library order, cycling per category) so the same profile always
//! produces the same plan. It does not attempt to hit the calorie target
//! precisely; it exists so the user always has a usable plan when the
//! collaborator is down.

use async_trait::async_trait;

use super::PlanGenerator;
use crate::constants::food_library::{entries_for_region, FoodEntry};
use crate::constants::regions::region_for_country;
use crate::errors::AppResult;
use crate::models::{DietPlan, DietPreference, FoodCategory, FoodItem, HealthMetrics, UserProfile};

/// Fixed three-tip summary used when no generated text is available
pub const FALLBACK_SUMMARY: &str = "1. Stay consistent with your daily calorie goal.\n\
                                    2. Prioritize protein to maintain muscle mass.\n\
                                    3. Drink at least 3 liters of water daily.";

/// Offline plan generator; see the module docs
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPlanGenerator;

impl LocalPlanGenerator {
    /// Create a new local generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the deterministic plan for a profile
    #[must_use]
    pub fn build_plan(profile: &UserProfile) -> DietPlan {
        let region = region_for_country(&profile.country);
        let vegetarian_only = profile.diet_preference == DietPreference::Vegetarian;

        let pool: Vec<&FoodEntry> = entries_for_region(region, vegetarian_only).collect();
        let carbs = by_category(&pool, FoodCategory::Carb);
        let proteins = by_category(&pool, FoodCategory::Protein);
        let vegs = by_category(&pool, FoodCategory::Veg);
        let fruits = by_category(&pool, FoodCategory::Fruit);

        DietPlan {
            breakfast: meal(&[pick(&carbs, 0), pick(&proteins, 0), pick(&fruits, 0)]),
            lunch: meal(&[pick(&carbs, 1), pick(&proteins, 1), pick(&vegs, 0)]),
            snacks: meal(&[pick(&fruits, 1), pick(&proteins, 2)]),
            dinner: meal(&[pick(&carbs, 2), pick(&proteins, 3), pick(&vegs, 1)]),
        }
    }
}

fn by_category<'a>(pool: &[&'a FoodEntry], category: FoodCategory) -> Vec<&'a FoodEntry> {
    pool.iter()
        .copied()
        .filter(|entry| entry.category == category)
        .collect()
}

/// Cycle through a category list; None when the region offers nothing
fn pick<'a>(list: &[&'a FoodEntry], index: usize) -> Option<&'a FoodEntry> {
    if list.is_empty() {
        None
    } else {
        Some(list[index % list.len()])
    }
}

fn meal(picks: &[Option<&FoodEntry>]) -> Vec<FoodItem> {
    picks
        .iter()
        .filter_map(|entry| entry.map(FoodItem::from))
        .collect()
}

#[async_trait]
impl PlanGenerator for LocalPlanGenerator {
    fn name(&self) -> &'static str {
        "local-fallback"
    }

    async fn generate_summary(
        &self,
        _profile: &UserProfile,
        _metrics: &HealthMetrics,
    ) -> AppResult<String> {
        Ok(FALLBACK_SUMMARY.to_owned())
    }

    async fn generate_diet_plan(
        &self,
        profile: &UserProfile,
        _metrics: &HealthMetrics,
    ) -> AppResult<serde_json::Value> {
        let plan = Self::build_plan(profile);
        Ok(serde_json::to_value(plan)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, FitnessGoal, Gender};

    fn profile(country: &str, preference: DietPreference) -> UserProfile {
        UserProfile {
            name: "Alex".to_owned(),
            age: 30,
            gender: Gender::Male,
            height_cm: 180.0,
            weight_kg: 80.0,
            country: country.to_owned(),
            activity_level: ActivityLevel::Moderate,
            goal: FitnessGoal::FatLoss,
            diet_preference: preference,
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let profile = profile("India", DietPreference::Standard);
        let first = LocalPlanGenerator::build_plan(&profile);
        let second = LocalPlanGenerator::build_plan(&profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_uses_regional_staples() {
        let plan = LocalPlanGenerator::build_plan(&profile("Bangladesh", DietPreference::Standard));
        let ids: Vec<&str> = plan
            .meals()
            .flat_map(|(_, items)| items.iter())
            .map(|item| item.id.as_str())
            .collect();
        assert!(ids.iter().any(|id| id.starts_with("sa-")));
        assert!(!ids.iter().any(|id| id.starts_with("we-")));
    }

    #[test]
    fn test_vegetarian_plan_has_no_meat_or_fish() {
        let plan = LocalPlanGenerator::build_plan(&profile("USA", DietPreference::Vegetarian));
        for (_, items) in plan.meals() {
            for item in items {
                assert!(
                    !matches!(
                        item.id.as_str(),
                        "we-chicken-1" | "we-beef-1" | "we-salmon-1"
                    ),
                    "vegetarian plan contains {}",
                    item.name
                );
            }
        }
    }

    #[test]
    fn test_every_meal_is_non_empty_for_allowed_countries() {
        for country in crate::constants::regions::ALLOWED_COUNTRIES {
            let plan = LocalPlanGenerator::build_plan(&profile(country, DietPreference::Standard));
            for (meal, items) in plan.meals() {
                assert!(!items.is_empty(), "{country}: meal '{meal}' is empty");
            }
        }
    }

    #[tokio::test]
    async fn test_generated_payload_passes_boundary_validation() {
        let generator = LocalPlanGenerator::new();
        let profile = profile("Japan", DietPreference::Standard);
        let metrics = crate::intelligence::compute_health_metrics(
            &profile,
            &crate::config::FitnessConfig::default(),
        );
        let payload = generator.generate_diet_plan(&profile, &metrics).await.unwrap();
        let plan = crate::llm::parse_diet_plan(payload).unwrap();
        assert!(plan.total_calories() > 0.0);
    }
}

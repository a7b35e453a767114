// ABOUTME: Common data models for biometric profiles, health metrics, and plans
// ABOUTME: Closed domain enums with separate display labels, plus plan payload types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! # Common Data Models
//!
//! Core types shared across the planning engine: the immutable
//! [`UserProfile`] input record, the fully derived [`HealthMetrics`]
//! output record, and the diet/workout payload types exchanged with
//! collaborators.
//!
//! Domain values are closed tagged enums; the human-readable labels shown
//! in onboarding forms and prompts live in [`label`](ActivityLevel::label)
//! lookups so that identity stays decoupled from presentation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Biological gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male (Mifflin-St Jeor offset +5)
    Male,
    /// Female (Mifflin-St Jeor offset -161)
    Female,
}

impl Gender {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Physical job plus twice-daily training
    ExtraActive,
}

impl ActivityLevel {
    /// All levels, in ascending multiplier order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Onboarding display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (Office job, little exercise)",
            Self::Light => "Lightly Active (1-3 days/week)",
            Self::Moderate => "Moderately Active (3-5 days/week)",
            Self::VeryActive => "Very Active (6-7 days/week)",
            Self::ExtraActive => "Extra Active (Physical job + 2x training)",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "very-active" | "very_active" => Ok(Self::VeryActive),
            "extra-active" | "extra_active" => Ok(Self::ExtraActive),
            other => Err(AppError::lookup_failed(format!(
                "unknown activity level '{other}' (expected sedentary, light, moderate, very-active, extra-active)"
            ))),
        }
    }
}

/// Training goal: determines the calorie adjustment and macro ratio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FitnessGoal {
    /// Visible abdominal definition (deficit, high protein)
    SixPack,
    /// Body-fat reduction (deficit)
    FatLoss,
    /// Hypertrophy (surplus, high protein)
    MuscleGain,
    /// Maximal strength (surplus)
    Strength,
    /// Maintenance and general conditioning
    GeneralFitness,
}

impl FitnessGoal {
    /// All goals, in onboarding order
    pub const ALL: [Self; 5] = [
        Self::SixPack,
        Self::FatLoss,
        Self::MuscleGain,
        Self::Strength,
        Self::GeneralFitness,
    ];

    /// Onboarding display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SixPack => "Six Pack Abs",
            Self::FatLoss => "Fat Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Strength => "Strength & Power",
            Self::GeneralFitness => "General Fitness",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "six-pack" | "six_pack" => Ok(Self::SixPack),
            "fat-loss" | "fat_loss" => Ok(Self::FatLoss),
            "muscle-gain" | "muscle_gain" => Ok(Self::MuscleGain),
            "strength" => Ok(Self::Strength),
            "general-fitness" | "general_fitness" | "general" => Ok(Self::GeneralFitness),
            other => Err(AppError::lookup_failed(format!(
                "unknown fitness goal '{other}' (expected six-pack, fat-loss, muscle-gain, strength, general-fitness)"
            ))),
        }
    }
}

/// Dietary preference: may override the goal-based macro ratio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietPreference {
    /// No restriction
    Standard,
    /// No meat or fish
    Vegetarian,
    /// Protein-forward split (40/40/20)
    HighProtein,
    /// Carb-restricted split (35/25/40)
    LowCarb,
}

impl DietPreference {
    /// Onboarding display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Vegetarian => "Vegetarian",
            Self::HighProtein => "High Protein",
            Self::LowCarb => "Low Carb",
        }
    }
}

impl FromStr for DietPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "vegetarian" => Ok(Self::Vegetarian),
            "high-protein" | "high_protein" => Ok(Self::HighProtein),
            "low-carb" | "low_carb" => Ok(Self::LowCarb),
            other => Err(AppError::lookup_failed(format!(
                "unknown diet preference '{other}' (expected standard, vegetarian, high-protein, low-carb)"
            ))),
        }
    }
}

/// Food-sourcing region, derived from the profile's country
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    /// Bangladesh, India, Pakistan, Sri Lanka
    SouthAsia,
    /// North America, Europe, Australia, Brazil
    Western,
    /// UAE, Saudi Arabia
    MiddleEast,
    /// China, Japan, Singapore
    EastAsia,
    /// Staples available everywhere; also the unknown-country fallback
    Global,
}

/// User biometric profile, immutable per computation call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name; not used in any computation
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Biological gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Country of residence, one of the fixed allowed set
    pub country: String,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Training goal
    pub goal: FitnessGoal,
    /// Dietary preference
    pub diet_preference: DietPreference,
}

/// BMI classification with half-open lower-bound thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 inclusive to 25 exclusive
    Normal,
    /// 25 inclusive to 30 exclusive
    Overweight,
    /// 30 and above
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Protein grams per day
    pub protein_g: i32,
    /// Carbohydrate grams per day
    pub carbs_g: i32,
    /// Fat grams per day
    pub fats_g: i32,
}

/// Fully derived health metrics; a pure function of the profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthMetrics {
    /// Body Mass Index, rounded to one decimal place
    pub bmi: f64,
    /// BMI classification
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate in kcal/day (Mifflin-St Jeor)
    pub bmr: i32,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: i32,
    /// Goal-adjusted daily calorie target in kcal/day
    pub daily_calories: i32,
    /// Macro split of the daily calorie target
    pub macros: MacroTargets,
}

/// Food item category in a diet plan payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Primary protein source
    Protein,
    /// Primary carbohydrate source
    Carb,
    /// Vegetable
    Veg,
    /// Fruit
    Fruit,
    /// Dairy
    Dairy,
    /// Fat source
    Fat,
}

/// A single food item in a diet plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Stable item identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Serving description, e.g. "1 cup"
    pub serving: String,
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
}

/// A daily diet plan keyed by meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    /// Breakfast items, in serving order
    pub breakfast: Vec<FoodItem>,
    /// Lunch items
    pub lunch: Vec<FoodItem>,
    /// Snack items
    pub snacks: Vec<FoodItem>,
    /// Dinner items
    pub dinner: Vec<FoodItem>,
}

impl DietPlan {
    /// Iterate all meals as (name, items) pairs, in day order
    pub fn meals(&self) -> impl Iterator<Item = (&'static str, &[FoodItem])> {
        [
            ("breakfast", self.breakfast.as_slice()),
            ("lunch", self.lunch.as_slice()),
            ("snacks", self.snacks.as_slice()),
            ("dinner", self.dinner.as_slice()),
        ]
        .into_iter()
    }

    /// Total calories across all meals
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.meals()
            .flat_map(|(_, items)| items.iter())
            .map(|item| item.calories)
            .sum()
    }
}

/// A single exercise prescription in a workout routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutExercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetition scheme, e.g. "8-12 reps" or "30 sec"
    pub reps: String,
    /// Rest between sets, e.g. "90 sec"
    pub rest: String,
    /// Optional coaching note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A goal-specific workout routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutRoutine {
    /// Goal this routine targets
    pub goal: FitnessGoal,
    /// Warmup block
    pub warmup: Vec<WorkoutExercise>,
    /// Main working block
    pub main: Vec<WorkoutExercise>,
    /// Cooldown block
    pub cooldown: Vec<WorkoutExercise>,
}

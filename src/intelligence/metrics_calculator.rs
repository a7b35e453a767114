// ABOUTME: Health-metrics calculation pipeline: BMI, BMR, TDEE, calories, macros
// ABOUTME: A pure, total transform from a biometric profile to derived metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Metrics Calculator Module
//!
//! Implements the deterministic formula pipeline that converts a
//! [`UserProfile`] into [`HealthMetrics`]: BMI classification, basal
//! metabolic rate, total daily energy expenditure, a goal-adjusted calorie
//! target, and a macro split.
//!
//! The pipeline is a total function: it never fails for well-typed input.
//! Out-of-range numerics (zero height, negative weight) produce
//! mathematically degenerate output rather than an error; rejecting such
//! profiles is the job of [`crate::validation`] upstream.
//!
//! Intermediate values carry full precision; rounding happens once, at the
//! output fields. Rounded and unrounded values never mix inside the
//! pipeline.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. DOI: 10.1093/ajcn/51.2.241
//! - `McArdle`, W.D., et al. (2010). Exercise Physiology (activity factors)
//! - WHO TRS 894 (2000) (BMI classification)

use crate::config::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentsConfig, FitnessConfig, MacroSplit,
    MacroSplitsConfig,
};
use crate::intelligence::physiological_constants::{bmi, energy, CM_PER_METER};
use crate::models::{
    ActivityLevel, BmiCategory, DietPreference, FitnessGoal, Gender, HealthMetrics, MacroTargets,
    UserProfile,
};

/// Body Mass Index from weight and height, at full precision
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// The reported metric is rounded to one decimal at the output boundary;
/// classification uses this unrounded value.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value into its WHO category
///
/// Boundaries are half-open on the lower bound: exactly 18.5 is Normal,
/// exactly 25 is Overweight, exactly 30 is Obese.
#[must_use]
pub fn classify_bmi(bmi_value: f64) -> BmiCategory {
    if bmi_value < bmi::NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi_value < bmi::OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi_value < bmi::OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = 10·`weight_kg` + 6.25·`height_cm` − 5·age, then +5 for
/// men and −161 for women (coefficients taken from `config`).
///
/// Returns the unrounded value; TDEE is computed from it before any
/// rounding to avoid compounding rounding error.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let base = config.weight_coef * weight_kg
        + config.height_coef * height_cm
        + config.age_coef * f64::from(age);
    base + config.gender_constant(gender)
}

/// Total Daily Energy Expenditure: BMR scaled by the activity factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Goal-adjusted daily calorie target
///
/// Applies a flat adjustment to TDEE: the configured deficit for fat-loss
/// goals, the configured surplus for building goals, nothing for general
/// fitness. The result is intentionally not clamped to a minimum floor.
#[must_use]
pub fn daily_calorie_target(
    tdee: f64,
    goal: FitnessGoal,
    config: &CalorieAdjustmentsConfig,
) -> f64 {
    match goal {
        FitnessGoal::FatLoss | FitnessGoal::SixPack => tdee + config.deficit,
        FitnessGoal::MuscleGain | FitnessGoal::Strength => tdee + config.surplus,
        FitnessGoal::GeneralFitness => tdee,
    }
}

/// Select the macro ratio for a goal and diet preference
///
/// Evaluated as sequential overrides in fixed precedence; the last match
/// wins. This is deliberately not a lookup keyed on (goal, preference):
/// the override order is part of the contract and must hold for any
/// future preference expansion.
#[must_use]
pub fn select_macro_split(
    goal: FitnessGoal,
    preference: DietPreference,
    config: &MacroSplitsConfig,
) -> MacroSplit {
    let mut split = config.default_split;
    if matches!(goal, FitnessGoal::SixPack | FitnessGoal::MuscleGain) {
        split = config.protein_forward_goal;
    }
    if preference == DietPreference::LowCarb {
        split = config.low_carb;
    }
    if preference == DietPreference::HighProtein {
        split = config.high_protein;
    }
    split
}

/// Convert a calorie target and macro ratio into gram targets
///
/// Grams are rounded independently with the standard 4/4/9 kcal-per-gram
/// factors; the rounded grams may drift from the calorie target by a few
/// kcal and are never reconciled.
fn macro_targets(daily_calories: f64, split: MacroSplit) -> MacroTargets {
    MacroTargets {
        protein_g: round_i32(daily_calories * split.protein / energy::KCAL_PER_GRAM_PROTEIN),
        carbs_g: round_i32(daily_calories * split.carbs / energy::KCAL_PER_GRAM_CARBS),
        fats_g: round_i32(daily_calories * split.fat / energy::KCAL_PER_GRAM_FAT),
    }
}

/// Derive the complete health metrics for a profile
///
/// This is the engine's single entry point: a pure, total, synchronous
/// transform. Re-run it on every relevant profile change; the result for
/// an identical profile is bit-identical.
#[must_use]
pub fn compute_health_metrics(profile: &UserProfile, config: &FitnessConfig) -> HealthMetrics {
    let raw_bmi = calculate_bmi(profile.weight_kg, profile.height_cm);

    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let daily_calories = daily_calorie_target(tdee, profile.goal, &config.calorie_adjustments);
    let split = select_macro_split(profile.goal, profile.diet_preference, &config.macro_splits);

    HealthMetrics {
        bmi: round_1dp(raw_bmi),
        bmi_category: classify_bmi(raw_bmi),
        bmr: round_i32(bmr),
        tdee: round_i32(tdee),
        daily_calories: round_i32(daily_calories),
        macros: macro_targets(daily_calories, split),
    }
}

/// Round to one decimal place, half away from zero
fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to the nearest integer, half away from zero; saturating on
/// degenerate (infinite) input, zero on NaN
fn round_i32(value: f64) -> i32 {
    value.round() as i32
}

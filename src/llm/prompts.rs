// ABOUTME: Prompt builders for the content-generation collaborator
// ABOUTME: Summary and diet-plan requests carrying the computed numeric targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Prompt construction for [`PlanGenerator`](super::PlanGenerator)
//! implementations
//!
//! The prompts carry the derived numeric targets and the profile's display
//! labels; the collaborator is asked to satisfy the targets, never to
//! recompute them.

use crate::models::{HealthMetrics, UserProfile};

/// Build the health-summary prompt
///
/// Asks for a brief, encouraging plain-text summary with exactly three
/// numbered tips and no markup.
#[must_use]
pub fn summary_prompt(profile: &UserProfile, metrics: &HealthMetrics) -> String {
    format!(
        "Act as a world-class nutritionist and fitness coach. \
         Analyze this user's profile and provide a brief, encouraging health summary \
         and exactly 3 key tips for success.\n\
         \n\
         STRICT FORMATTING RULES:\n\
         1. Use a numbered list for the tips (e.g. 1. Tip one, 2. Tip two, 3. Tip three).\n\
         2. DO NOT use asterisks (*) anywhere in the response.\n\
         3. DO NOT use markdown bolding or bullets.\n\
         4. Output only plain text.\n\
         5. Keep it very concise (under 120 words).\n\
         6. Address the user by name if provided: {name}.\n\
         \n\
         User Profile:\n\
         - Name: {name}\n\
         - Age: {age}\n\
         - Weight: {weight}kg\n\
         - Height: {height}cm\n\
         - Goal: {goal}\n\
         - Activity: {activity}\n\
         - Location: {country}\n\
         \n\
         Metrics:\n\
         - BMI: {bmi} ({category})\n\
         - TDEE: {tdee} kcal\n\
         - Macro Goals: P:{protein}g, C:{carbs}g, F:{fats}g",
        name = profile.name,
        age = profile.age,
        weight = profile.weight_kg,
        height = profile.height_cm,
        goal = profile.goal.label(),
        activity = profile.activity_level.label(),
        country = profile.country,
        bmi = metrics.bmi,
        category = metrics.bmi_category,
        tdee = metrics.tdee,
        protein = metrics.macros.protein_g,
        carbs = metrics.macros.carbs_g,
        fats = metrics.macros.fats_g,
    )
}

/// Build the diet-plan prompt
///
/// Asks for a locally-sourced daily plan meeting the calorie and macro
/// targets; the response is expected as JSON matching the
/// [`DietPlan`](crate::models::DietPlan) schema.
#[must_use]
pub fn diet_plan_prompt(profile: &UserProfile, metrics: &HealthMetrics) -> String {
    format!(
        "Generate a daily diet plan for {name} who lives in {country}.\n\
         Fitness Goal: {goal}\n\
         Diet Preference: {diet}\n\
         Target Daily Calories: {calories} kcal\n\
         Target Macros: Protein {protein}g, Carbs {carbs}g, Fats {fats}g.\n\
         \n\
         CRITICAL INSTRUCTIONS:\n\
         1. Use ONLY foods that are locally available, culturally common, and affordable in {country}.\n\
         2. Ensure the meal items combined roughly meet the target calories and macros.\n\
         3. For {country}, suggest specific traditional or common meals.\n\
         4. Avoid expensive imported goods; focus on staples.\n\
         5. Respond as JSON with keys breakfast, lunch, snacks, dinner; each an array of \
         items with id, name, serving, calories, protein, carbs, fats, category.",
        name = profile.name,
        country = profile.country,
        goal = profile.goal.label(),
        diet = profile.diet_preference.label(),
        calories = metrics.daily_calories,
        protein = metrics.macros.protein_g,
        carbs = metrics.macros.carbs_g,
        fats = metrics.macros.fats_g,
    )
}

// ABOUTME: Content-generation collaborator contract for summaries and diet plans
// ABOUTME: Defines the PlanGenerator trait and boundary validation of its payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! # Plan Generator Service Provider Interface
//!
//! The planner hands `(profile, metrics)` to a content-generation
//! collaborator and expects back either a short plain-prose health summary
//! or a structured diet plan keyed by meal. The collaborator is an
//! untrusted, possibly-unavailable oracle: its diet payload arrives as raw
//! JSON and is schema-validated here before anything downstream trusts it.
//!
//! Transport (HTTP clients, API keys, retries) is out of scope for this
//! crate; implementations plug in behind [`PlanGenerator`]. A
//! deterministic [`LocalPlanGenerator`](fallback::LocalPlanGenerator)
//! built on the static food library ships as the offline fallback.

pub mod fallback;
pub mod prompts;

pub use fallback::LocalPlanGenerator;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::models::{DietPlan, FoodItem, HealthMetrics, UserProfile};

/// Contract for the content-generation collaborator
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Human-readable provider name, used in logs and error messages
    fn name(&self) -> &'static str;

    /// Generate a short, encouraging health summary in plain prose
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the collaborator fails or
    /// is unreachable.
    async fn generate_summary(
        &self,
        profile: &UserProfile,
        metrics: &HealthMetrics,
    ) -> AppResult<String>;

    /// Generate a structured diet plan as a raw JSON payload
    ///
    /// The payload must deserialize into [`DietPlan`] and pass
    /// [`parse_diet_plan`]; callers never consume it untyped.
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the collaborator fails or
    /// is unreachable.
    async fn generate_diet_plan(
        &self,
        profile: &UserProfile,
        metrics: &HealthMetrics,
    ) -> AppResult<serde_json::Value>;
}

#[async_trait]
impl<T> PlanGenerator for &T
where
    T: PlanGenerator + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn generate_summary(
        &self,
        profile: &UserProfile,
        metrics: &HealthMetrics,
    ) -> AppResult<String> {
        (**self).generate_summary(profile, metrics).await
    }

    async fn generate_diet_plan(
        &self,
        profile: &UserProfile,
        metrics: &HealthMetrics,
    ) -> AppResult<serde_json::Value> {
        (**self).generate_diet_plan(profile, metrics).await
    }
}

#[async_trait]
impl<T> PlanGenerator for std::sync::Arc<T>
where
    T: PlanGenerator + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn generate_summary(
        &self,
        profile: &UserProfile,
        metrics: &HealthMetrics,
    ) -> AppResult<String> {
        (**self).generate_summary(profile, metrics).await
    }

    async fn generate_diet_plan(
        &self,
        profile: &UserProfile,
        metrics: &HealthMetrics,
    ) -> AppResult<serde_json::Value> {
        (**self).generate_diet_plan(profile, metrics).await
    }
}

/// Deserialize and validate an untrusted diet-plan payload
///
/// # Errors
///
/// Returns `SerializationError` when the payload does not match the plan
/// schema or violates a semantic constraint (empty meal, blank fields,
/// negative or non-finite nutrition numbers).
pub fn parse_diet_plan(payload: serde_json::Value) -> AppResult<DietPlan> {
    let plan: DietPlan = serde_json::from_value(payload)?;
    validate_diet_plan(&plan)?;
    Ok(plan)
}

fn validate_diet_plan(plan: &DietPlan) -> AppResult<()> {
    for (meal, items) in plan.meals() {
        if items.is_empty() {
            return Err(AppError::serialization(format!(
                "diet plan meal '{meal}' is empty"
            )));
        }
        for item in items {
            validate_food_item(meal, item)?;
        }
    }
    Ok(())
}

fn validate_food_item(meal: &str, item: &FoodItem) -> AppResult<()> {
    if item.id.trim().is_empty() || item.name.trim().is_empty() || item.serving.trim().is_empty() {
        return Err(AppError::serialization(format!(
            "diet plan meal '{meal}' contains an item with blank id, name, or serving"
        )));
    }
    let nutrition = [
        ("calories", item.calories),
        ("protein", item.protein),
        ("carbs", item.carbs),
        ("fats", item.fats),
    ];
    for (field, value) in nutrition {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::serialization(format!(
                "diet plan item '{}' has invalid {field}: {value}",
                item.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Rolled Oats",
            "serving": "1 cup",
            "calories": 160.0,
            "protein": 6.0,
            "carbs": 28.0,
            "fats": 3.0,
            "category": "carb"
        })
    }

    fn plan_json() -> serde_json::Value {
        json!({
            "breakfast": [item_json("a")],
            "lunch": [item_json("b")],
            "snacks": [item_json("c")],
            "dinner": [item_json("d")],
        })
    }

    #[test]
    fn test_well_formed_payload_parses() {
        let plan = parse_diet_plan(plan_json()).unwrap();
        assert_eq!(plan.breakfast.len(), 1);
        assert_eq!(plan.breakfast[0].name, "Rolled Oats");
    }

    #[test]
    fn test_missing_meal_key_rejected() {
        let mut payload = plan_json();
        payload.as_object_mut().unwrap().remove("dinner");
        assert!(parse_diet_plan(payload).is_err());
    }

    #[test]
    fn test_empty_meal_rejected() {
        let mut payload = plan_json();
        payload["snacks"] = json!([]);
        let err = parse_diet_plan(payload).unwrap_err();
        assert!(err.message.contains("snacks"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut payload = plan_json();
        payload["lunch"][0]["category"] = json!("mystery");
        assert!(parse_diet_plan(payload).is_err());
    }

    #[test]
    fn test_negative_calories_rejected() {
        let mut payload = plan_json();
        payload["dinner"][0]["calories"] = json!(-10.0);
        let err = parse_diet_plan(payload).unwrap_err();
        assert!(err.message.contains("calories"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut payload = plan_json();
        payload["breakfast"][0]["name"] = json!("  ");
        assert!(parse_diet_plan(payload).is_err());
    }
}

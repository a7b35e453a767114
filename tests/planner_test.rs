// ABOUTME: Integration tests for the fitness planner orchestration
// ABOUTME: Covers caching, invalidation, fallbacks, and payload rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Planner orchestration test suite
//!
//! Exercises the planner against a scripted content-generation double:
//! - full-plan assembly and the plan-cache key semantics
//! - collaborator failure and malformed-payload fallbacks
//! - summary fallback and asterisk stripping
//! - validation rejection before any storage happens

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use fitnation::errors::{AppError, AppResult, ErrorCode};
use fitnation::llm::{LocalPlanGenerator, PlanGenerator};
use fitnation::models::{
    ActivityLevel, DietPreference, FitnessGoal, Gender, HealthMetrics, UserProfile,
};
use fitnation::planner::FitnessPlanner;
use fitnation::store::{InMemoryProfileStore, ProfileStore};

// ============================================================================
// Test double
// ============================================================================

/// What the scripted generator should do on each call
#[derive(Debug, Clone, Copy)]
enum Script {
    /// Return a well-formed plan payload
    ValidPlan,
    /// Return JSON that violates the plan schema
    MalformedPlan,
    /// Fail as an unavailable service
    Unavailable,
}

struct ScriptedGenerator {
    script: Script,
    plan_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn new(script: Script) -> Self {
        Self {
            script,
            plan_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
        }
    }

    fn plan_calls(&self) -> usize {
        self.plan_calls.load(Ordering::SeqCst)
    }
}

fn valid_plan_payload() -> serde_json::Value {
    let item = json!({
        "id": "gen-1",
        "name": "Grilled Chicken Breast",
        "serving": "100g",
        "calories": 165.0,
        "protein": 31.0,
        "carbs": 0.0,
        "fats": 3.6,
        "category": "protein"
    });
    json!({
        "breakfast": [item],
        "lunch": [item],
        "snacks": [item],
        "dinner": [item],
    })
}

#[async_trait]
impl PlanGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate_summary(
        &self,
        profile: &UserProfile,
        _metrics: &HealthMetrics,
    ) -> AppResult<String> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::Unavailable => Err(AppError::external_unavailable("scripted")),
            _ => Ok(format!(
                "*Great* work, {}! 1. Eat well. 2. Train hard. 3. Sleep.",
                profile.name
            )),
        }
    }

    async fn generate_diet_plan(
        &self,
        _profile: &UserProfile,
        _metrics: &HealthMetrics,
    ) -> AppResult<serde_json::Value> {
        self.plan_calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::ValidPlan => Ok(valid_plan_payload()),
            Script::MalformedPlan => Ok(json!({ "breakfast": "toast" })),
            Script::Unavailable => Err(AppError::external_unavailable("scripted")),
        }
    }
}

fn profile() -> UserProfile {
    UserProfile {
        name: "Alex".to_owned(),
        age: 30,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        country: "USA".to_owned(),
        activity_level: ActivityLevel::Moderate,
        goal: FitnessGoal::FatLoss,
        diet_preference: DietPreference::Standard,
    }
}

// ============================================================================
// Full plan assembly
// ============================================================================

#[tokio::test]
async fn test_full_plan_happy_path() {
    let planner = FitnessPlanner::new(
        InMemoryProfileStore::new(),
        ScriptedGenerator::new(Script::ValidPlan),
    );

    let bundle = planner.full_plan(profile()).await.unwrap();
    assert_eq!(bundle.metrics.bmr, 1780);
    assert_eq!(bundle.metrics.daily_calories, 2259);
    assert_eq!(bundle.workout.goal, FitnessGoal::FatLoss);
    assert_eq!(bundle.diet.breakfast[0].id, "gen-1");
    // Collaborator prose is served with asterisks stripped
    assert!(bundle.summary.contains("Great work, Alex!"));
    assert!(!bundle.summary.contains('*'));
}

#[tokio::test]
async fn test_invalid_profile_rejected_before_storage() {
    let store = InMemoryProfileStore::new();
    let generator = ScriptedGenerator::new(Script::ValidPlan);

    {
        let planner = FitnessPlanner::new(&store, &generator);
        let mut bad = profile();
        bad.age = 5;
        let err = planner.full_plan(bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    assert!(store.load_profile().await.unwrap().is_none());
    assert_eq!(generator.plan_calls(), 0);
}

// ============================================================================
// Diet plan caching
// ============================================================================

#[tokio::test]
async fn test_generated_plan_is_cached_per_key() {
    let generator = ScriptedGenerator::new(Script::ValidPlan);
    let planner = FitnessPlanner::new(InMemoryProfileStore::new(), &generator);

    let p = profile();
    let metrics = planner.update_profile(p.clone()).await.unwrap();

    let first = planner.diet_plan(&p, &metrics).await.unwrap();
    let second = planner.diet_plan(&p, &metrics).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(generator.plan_calls(), 1, "second call must hit the cache");
}

#[tokio::test]
async fn test_profile_update_invalidates_plan_cache() {
    let generator = ScriptedGenerator::new(Script::ValidPlan);
    let planner = FitnessPlanner::new(InMemoryProfileStore::new(), &generator);

    let p = profile();
    let metrics = planner.update_profile(p.clone()).await.unwrap();
    planner.diet_plan(&p, &metrics).await.unwrap();
    assert_eq!(generator.plan_calls(), 1);

    // Any profile update clears the cache, forcing regeneration
    let metrics = planner.update_profile(p.clone()).await.unwrap();
    planner.diet_plan(&p, &metrics).await.unwrap();
    assert_eq!(generator.plan_calls(), 2);
}

// ============================================================================
// Fallback behavior
// ============================================================================

#[tokio::test]
async fn test_unavailable_collaborator_serves_local_fallback() {
    let generator = ScriptedGenerator::new(Script::Unavailable);
    let planner = FitnessPlanner::new(InMemoryProfileStore::new(), &generator);

    let p = profile();
    let metrics = planner.update_profile(p.clone()).await.unwrap();
    let plan = planner.diet_plan(&p, &metrics).await.unwrap();

    assert_eq!(plan, LocalPlanGenerator::build_plan(&p));
}

#[tokio::test]
async fn test_fallback_plan_is_not_cached() {
    let generator = ScriptedGenerator::new(Script::Unavailable);
    let planner = FitnessPlanner::new(InMemoryProfileStore::new(), &generator);

    let p = profile();
    let metrics = planner.update_profile(p.clone()).await.unwrap();
    planner.diet_plan(&p, &metrics).await.unwrap();
    planner.diet_plan(&p, &metrics).await.unwrap();

    // The collaborator is retried on every request while it stays down
    assert_eq!(generator.plan_calls(), 2);
}

#[tokio::test]
async fn test_malformed_payload_is_rejected_and_falls_back() {
    let generator = ScriptedGenerator::new(Script::MalformedPlan);
    let planner = FitnessPlanner::new(InMemoryProfileStore::new(), &generator);

    let p = profile();
    let metrics = planner.update_profile(p.clone()).await.unwrap();
    let plan = planner.diet_plan(&p, &metrics).await.unwrap();

    // The untrusted payload never leaks through; the local plan is served
    assert_eq!(plan, LocalPlanGenerator::build_plan(&p));
}

#[tokio::test]
async fn test_summary_fallback_text_when_unavailable() {
    let generator = ScriptedGenerator::new(Script::Unavailable);
    let planner = FitnessPlanner::new(InMemoryProfileStore::new(), &generator);

    let p = profile();
    let metrics = planner.update_profile(p.clone()).await.unwrap();
    let summary = planner.health_summary(&p, &metrics).await;

    assert!(summary.contains("Stay consistent with your daily calorie goal"));
    assert!(summary.contains("3 liters of water"));
}

// ============================================================================
// Reset
// ============================================================================

#[tokio::test]
async fn test_reset_clears_profile_and_cache() {
    let store = InMemoryProfileStore::new();
    let generator = ScriptedGenerator::new(Script::ValidPlan);

    {
        let planner = FitnessPlanner::new(&store, &generator);
        let p = profile();
        let metrics = planner.update_profile(p.clone()).await.unwrap();
        planner.diet_plan(&p, &metrics).await.unwrap();
        planner.reset().await.unwrap();
    }

    assert!(store.load_profile().await.unwrap().is_none());

    let planner = FitnessPlanner::new(&store, &generator);
    let p = profile();
    let metrics = planner.metrics_for(&p);
    planner.diet_plan(&p, &metrics).await.unwrap();
    assert_eq!(generator.plan_calls(), 2, "cache must be empty after reset");
}

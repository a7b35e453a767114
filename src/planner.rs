// ABOUTME: Plan orchestration: validation, metrics, workout, diet plan, summary
// ABOUTME: Ties the store, the metrics engine, and the content collaborator together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! # Fitness Planner
//!
//! The planner is the composition root of the library: it validates the
//! profile, persists it, re-derives metrics, resolves the goal's workout
//! routine, and obtains a diet plan and health summary from the content
//! collaborator - falling back to the deterministic local generator when
//! the collaborator fails, so callers always receive a usable plan.
//!
//! Caching: a collaborator-generated diet plan is cached under the
//! composite key `{country}:{goal}:{diet-preference}`; fallback plans are
//! served but never cached, so the collaborator is retried on the next
//! request. A profile update invalidates the whole plan cache.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::FitnessConfig;
use crate::constants::workout_library::routine_for_goal;
use crate::errors::AppResult;
use crate::intelligence::compute_health_metrics;
use crate::llm::fallback::{LocalPlanGenerator, FALLBACK_SUMMARY};
use crate::llm::{parse_diet_plan, PlanGenerator};
use crate::models::{DietPlan, HealthMetrics, UserProfile, WorkoutRoutine};
use crate::store::{diet_cache_key, ProfileStore};
use crate::validation::validate_profile;

/// Everything the display layer needs for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanBundle {
    /// The profile the bundle was derived from
    pub profile: UserProfile,
    /// Derived health metrics
    pub metrics: HealthMetrics,
    /// Goal-specific workout routine
    pub workout: WorkoutRoutine,
    /// Daily diet plan
    pub diet: DietPlan,
    /// Short plain-prose health summary
    pub summary: String,
}

/// Orchestrates metric derivation and plan assembly
pub struct FitnessPlanner<S, G> {
    store: S,
    generator: G,
    config: FitnessConfig,
}

impl<S, G> FitnessPlanner<S, G>
where
    S: ProfileStore,
    G: PlanGenerator,
{
    /// Create a planner with the default formula configuration
    #[must_use]
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store,
            generator,
            config: FitnessConfig::default(),
        }
    }

    /// Create a planner with a custom formula configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration fails validation.
    pub fn with_config(store: S, generator: G, config: FitnessConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            generator,
            config,
        })
    }

    /// Access the formula configuration in use
    #[must_use]
    pub const fn config(&self) -> &FitnessConfig {
        &self.config
    }

    /// Validate and persist a profile, returning freshly derived metrics
    ///
    /// Any cached diet plan is invalidated: the plan must be regenerated
    /// against the new targets.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed profile, or a storage
    /// error from the repository.
    pub async fn update_profile(&self, profile: UserProfile) -> AppResult<HealthMetrics> {
        validate_profile(&profile)?;
        let stored = self.store.save_profile(profile.clone()).await?;
        self.store.invalidate_diet_plans().await?;
        info!(profile_id = %stored.id, "profile updated, plan cache invalidated");
        Ok(compute_health_metrics(&profile, &self.config))
    }

    /// Derive metrics without touching the store
    ///
    /// The caller is responsible for having validated the profile; an
    /// unvalidated profile yields degenerate numbers, never an error.
    #[must_use]
    pub fn metrics_for(&self, profile: &UserProfile) -> HealthMetrics {
        compute_health_metrics(profile, &self.config)
    }

    /// The static workout routine for the profile's goal
    #[must_use]
    pub fn workout_routine(&self, profile: &UserProfile) -> WorkoutRoutine {
        routine_for_goal(profile.goal)
    }

    /// Obtain a diet plan for the profile and its metrics
    ///
    /// Serves the cached plan when the composite key matches; otherwise
    /// asks the collaborator and schema-validates its payload. On any
    /// collaborator or payload failure the deterministic local plan is
    /// served instead (and deliberately not cached, so the collaborator
    /// is retried next time).
    ///
    /// # Errors
    ///
    /// Returns a storage error from the repository; collaborator failures
    /// are absorbed by the fallback.
    pub async fn diet_plan(
        &self,
        profile: &UserProfile,
        metrics: &HealthMetrics,
    ) -> AppResult<DietPlan> {
        let key = diet_cache_key(profile);
        if let Some(cached) = self.store.load_diet_plan(&key).await? {
            debug!(%key, "serving cached diet plan");
            return Ok(cached.plan);
        }

        match self.generated_plan(profile, metrics).await {
            Ok(plan) => {
                self.store.save_diet_plan(&key, plan.clone()).await?;
                info!(%key, generator = self.generator.name(), "diet plan generated and cached");
                Ok(plan)
            }
            Err(err) => {
                warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "diet plan generation failed, serving local fallback"
                );
                Ok(LocalPlanGenerator::build_plan(profile))
            }
        }
    }

    async fn generated_plan(
        &self,
        profile: &UserProfile,
        metrics: &HealthMetrics,
    ) -> AppResult<DietPlan> {
        let payload = self.generator.generate_diet_plan(profile, metrics).await?;
        parse_diet_plan(payload)
    }

    /// Obtain the health summary, falling back to the fixed tips text
    ///
    /// Stray `*` characters are stripped from collaborator output; the
    /// summary is plain prose by contract.
    pub async fn health_summary(&self, profile: &UserProfile, metrics: &HealthMetrics) -> String {
        match self.generator.generate_summary(profile, metrics).await {
            Ok(text) => text.replace('*', ""),
            Err(err) => {
                warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "summary generation failed, serving fallback text"
                );
                FALLBACK_SUMMARY.to_owned()
            }
        }
    }

    /// Assemble the complete bundle for a profile in one call
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed profile, or a storage
    /// error from the repository.
    pub async fn full_plan(&self, profile: UserProfile) -> AppResult<PlanBundle> {
        let metrics = self.update_profile(profile.clone()).await?;
        let workout = self.workout_routine(&profile);
        let diet = self.diet_plan(&profile, &metrics).await?;
        let summary = self.health_summary(&profile, &metrics).await;
        Ok(PlanBundle {
            profile,
            metrics,
            workout,
            diet,
            summary,
        })
    }

    /// Full reset: drop the stored profile and every cached plan
    ///
    /// # Errors
    ///
    /// Returns a storage error from the repository.
    pub async fn reset(&self) -> AppResult<()> {
        info!("resetting profile and plan cache");
        self.store.clear().await
    }
}

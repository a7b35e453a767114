// ABOUTME: Main library entry point for the FitNation planning engine
// ABOUTME: Derives health metrics and assembles diet/workout plans from a biometric profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

#![deny(unsafe_code)]

//! # FitNation Planning Engine
//!
//! A library for personal fitness planning: it takes a validated biometric
//! profile (age, gender, height, weight, activity level, goal, diet
//! preference) and derives standard health metrics (BMI, BMR, TDEE, daily
//! calorie target, macro split), then assembles a workout routine and a
//! diet plan around those targets.
//!
//! ## Architecture
//!
//! - **Models**: profile, metrics, and plan payload types
//! - **Intelligence**: the deterministic metrics engine (Mifflin-St Jeor
//!   BMR, activity-scaled TDEE, goal-adjusted calories, macro split)
//! - **Config**: formula coefficients and tables with sourced defaults
//! - **Llm**: content-generation collaborator contract with a local
//!   deterministic fallback
//! - **Store**: storage-agnostic profile and plan-cache repository
//! - **Planner**: orchestration tying the above together
//!
//! ## Example
//!
//! ```rust
//! use fitnation::config::FitnessConfig;
//! use fitnation::intelligence::compute_health_metrics;
//! use fitnation::models::{
//!     ActivityLevel, DietPreference, FitnessGoal, Gender, UserProfile,
//! };
//!
//! let profile = UserProfile {
//!     name: "Alex".to_owned(),
//!     age: 30,
//!     gender: Gender::Male,
//!     height_cm: 180.0,
//!     weight_kg: 80.0,
//!     country: "USA".to_owned(),
//!     activity_level: ActivityLevel::Moderate,
//!     goal: FitnessGoal::FatLoss,
//!     diet_preference: DietPreference::Standard,
//! };
//!
//! let metrics = compute_health_metrics(&profile, &FitnessConfig::default());
//! assert_eq!(metrics.bmr, 1780);
//! assert_eq!(metrics.daily_calories, 2259);
//! ```

/// Formula coefficients and lookup tables with sourced defaults
pub mod config;

/// Static lookup tables: countries, regional foods, workout routines
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Health-metrics derivation engine and physiological constants
pub mod intelligence;

/// Content-generation collaborator contract and local fallback
pub mod llm;

/// Structured logging setup for binaries
pub mod logging;

/// Common data models for profiles, metrics, and plans
pub mod models;

/// Plan orchestration: metrics, workout routine, diet plan, summary
pub mod planner;

/// Storage-agnostic profile and plan-cache repository
pub mod store;

/// Profile validation ahead of the metrics engine
pub mod validation;

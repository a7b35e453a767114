// ABOUTME: Intelligence module for deriving health metrics from a profile
// ABOUTME: Hosts the deterministic formula pipeline and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Health-metrics derivation engine

pub mod metrics_calculator;
pub mod physiological_constants;

pub use metrics_calculator::{
    calculate_bmi, calculate_mifflin_st_jeor, calculate_tdee, classify_bmi,
    compute_health_metrics, daily_calorie_target, select_macro_split,
};

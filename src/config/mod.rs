// ABOUTME: Configuration module for formula coefficients and lookup tables
// ABOUTME: Re-exports the fitness configuration used by the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Configuration management for the planning engine

mod fitness;

pub use fitness::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentsConfig, FitnessConfig, MacroSplit,
    MacroSplitsConfig,
};

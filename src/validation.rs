// ABOUTME: Profile validation applied before the metrics engine is invoked
// ABOUTME: Rejects malformed, missing, and out-of-range fields with typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Profile Validation
//!
//! The metrics engine is total and will happily emit degenerate numbers
//! for a zero height or negative weight. This stage rejects such profiles
//! up front so NaN/Infinity never propagates into plans or prompts.
//!
//! The enum-typed fields (gender, activity level, goal, diet preference)
//! need no checks here: closed enums make unmapped values unrepresentable.

use crate::constants::regions;
use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;

/// Youngest supported age; the BMR formula is validated for ages 10+
pub const MIN_AGE_YEARS: u32 = 10;

/// Oldest supported age
pub const MAX_AGE_YEARS: u32 = 100;

/// Tallest accepted height
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Heaviest accepted weight
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Validate a profile ahead of metric computation
///
/// # Errors
///
/// Returns `MissingRequiredField` for an empty name,
/// `ValueOutOfRange` for age/height/weight outside their accepted ranges,
/// and `InvalidInput` for a country outside the allowed set.
pub fn validate_profile(profile: &UserProfile) -> AppResult<()> {
    if profile.name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }

    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&profile.age) {
        return Err(AppError::out_of_range(format!(
            "age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years, got {}",
            profile.age
        )));
    }

    if !profile.height_cm.is_finite()
        || profile.height_cm <= 0.0
        || profile.height_cm > MAX_HEIGHT_CM
    {
        return Err(AppError::out_of_range(format!(
            "height must be between 0 and {MAX_HEIGHT_CM} cm, got {}",
            profile.height_cm
        )));
    }

    if !profile.weight_kg.is_finite()
        || profile.weight_kg <= 0.0
        || profile.weight_kg > MAX_WEIGHT_KG
    {
        return Err(AppError::out_of_range(format!(
            "weight must be between 0 and {MAX_WEIGHT_KG} kg, got {}",
            profile.weight_kg
        )));
    }

    if !regions::is_allowed_country(&profile.country) {
        return Err(AppError::invalid_input(format!(
            "country '{}' is not supported",
            profile.country
        )));
    }

    Ok(())
}

// ABOUTME: Physiological constants used by the metrics engine
// ABOUTME: Energy densities and BMI classification thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Physiological constants based on established nutrition science
//!
//! These values are fixed properties of the domain, not tunables; anything
//! a deployment might reasonably adjust lives in [`crate::config`] instead.

/// Energy density of macronutrients
///
/// Reference: Atwater general factors, USDA Agriculture Handbook No. 74
pub mod energy {
    /// Calories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Calories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Calories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// BMI classification thresholds
///
/// Boundaries are half-open on the lower bound: a BMI of exactly 18.5 is
/// Normal, exactly 25 is Overweight, exactly 30 is Obese.
///
/// Reference: WHO Technical Report Series 894 (2000), Obesity: preventing
/// and managing the global epidemic.
pub mod bmi {
    /// Below this value: Underweight
    pub const NORMAL_MIN: f64 = 18.5;

    /// At or above this value: Overweight
    pub const OVERWEIGHT_MIN: f64 = 25.0;

    /// At or above this value: Obese
    pub const OBESE_MIN: f64 = 30.0;
}

/// Centimeters per meter, for BMI height conversion
pub const CM_PER_METER: f64 = 100.0;

// ABOUTME: Fitness configuration: BMR coefficients, activity factors, calorie adjustments
// ABOUTME: Macro split tables with sourced defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Fitness Formula Configuration
//!
//! Coefficients and lookup tables consumed by the metrics engine. Defaults
//! reproduce the published formulas exactly; `validate()` guards custom
//! configurations.
//!
//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for
//!   resting energy expenditure. *American Journal of Clinical Nutrition*,
//!   51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
//!   Exercise Physiology.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, Gender};

/// Tolerance when checking that macro ratios sum to 1.0
const SPLIT_SUM_EPSILON: f64 = 1e-9;

/// Complete fitness formula configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitnessConfig {
    /// Basal Metabolic Rate calculation coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Flat goal-based calorie adjustments
    pub calorie_adjustments: CalorieAdjustmentsConfig,
    /// Macro ratio table
    pub macro_splits: MacroSplitsConfig,
}

impl FitnessConfig {
    /// Validate every section of the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any activity factor is non-positive, the
    /// deficit/surplus signs are inverted, or a macro split does not sum
    /// to 1.0.
    pub fn validate(&self) -> AppResult<()> {
        self.activity_factors.validate()?;
        self.calorie_adjustments.validate()?;
        self.macro_splits.validate()
    }
}

/// BMR calculation coefficients (Mifflin-St Jeor)
///
/// Formula: BMR = `weight_coef`·kg + `height_coef`·cm + `age_coef`·years
/// + gender constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl BmrConfig {
    /// Gender constant for the given gender
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_constant,
            Gender::Female => self.female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for the given activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    fn validate(&self) -> AppResult<()> {
        for level in ActivityLevel::ALL {
            let factor = self.factor_for(level);
            if factor <= 0.0 {
                return Err(AppError::config(format!(
                    "activity factor for {level:?} must be positive, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Flat additive calorie adjustments by goal
///
/// No minimum safe floor is applied to the adjusted target; the deficit
/// can drive the target below BMR for low-BMR users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentsConfig {
    /// Applied for fat-loss goals (FatLoss, SixPack): -500
    pub deficit: f64,
    /// Applied for building goals (MuscleGain, Strength): +300
    pub surplus: f64,
}

impl CalorieAdjustmentsConfig {
    fn validate(&self) -> AppResult<()> {
        if self.deficit > 0.0 {
            return Err(AppError::config(format!(
                "calorie deficit must not be positive, got {}",
                self.deficit
            )));
        }
        if self.surplus < 0.0 {
            return Err(AppError::config(format!(
                "calorie surplus must not be negative, got {}",
                self.surplus
            )));
        }
        Ok(())
    }
}

impl Default for CalorieAdjustmentsConfig {
    fn default() -> Self {
        Self {
            deficit: -500.0,
            surplus: 300.0,
        }
    }
}

/// Macro ratio of daily calories (protein/carb/fat fractions)
///
/// Fractions must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein fraction of calories (0.0-1.0)
    pub protein: f64,
    /// Carbohydrate fraction of calories (0.0-1.0)
    pub carbs: f64,
    /// Fat fraction of calories (0.0-1.0)
    pub fat: f64,
}

impl MacroSplit {
    /// Create a new macro split
    #[must_use]
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }
}

/// The macro ratio table consulted by the engine
///
/// Selection is NOT a lookup keyed on (goal, preference): the engine
/// applies these as sequential overrides in a fixed precedence (default,
/// then goal, then `LowCarb`, then `HighProtein` last).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitsConfig {
    /// Baseline split: 25% protein / 50% carb / 25% fat
    pub default_split: MacroSplit,
    /// SixPack and `MuscleGain` goals: 35/40/25
    pub protein_forward_goal: MacroSplit,
    /// `LowCarb` preference: 35/25/40
    pub low_carb: MacroSplit,
    /// `HighProtein` preference: 40/40/20
    pub high_protein: MacroSplit,
}

impl MacroSplitsConfig {
    fn validate(&self) -> AppResult<()> {
        let splits = [
            ("default_split", self.default_split),
            ("protein_forward_goal", self.protein_forward_goal),
            ("low_carb", self.low_carb),
            ("high_protein", self.high_protein),
        ];
        for (name, split) in splits {
            let sum = split.protein + split.carbs + split.fat;
            if (sum - 1.0).abs() > SPLIT_SUM_EPSILON {
                return Err(AppError::config(format!(
                    "{name} macro fractions must sum to 1.0, got {sum}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for MacroSplitsConfig {
    fn default() -> Self {
        Self {
            default_split: MacroSplit::new(0.25, 0.50, 0.25),
            protein_forward_goal: MacroSplit::new(0.35, 0.40, 0.25),
            low_carb: MacroSplit::new(0.35, 0.25, 0.40),
            high_protein: MacroSplit::new(0.40, 0.40, 0.20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FitnessConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_activity_factors_match_published_table() {
        let factors = ActivityFactorsConfig::default();
        assert!((factors.factor_for(ActivityLevel::Sedentary) - 1.2).abs() < f64::EPSILON);
        assert!((factors.factor_for(ActivityLevel::Light) - 1.375).abs() < f64::EPSILON);
        assert!((factors.factor_for(ActivityLevel::Moderate) - 1.55).abs() < f64::EPSILON);
        assert!((factors.factor_for(ActivityLevel::VeryActive) - 1.725).abs() < f64::EPSILON);
        assert!((factors.factor_for(ActivityLevel::ExtraActive) - 1.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_split_sum_rejected() {
        let mut config = FitnessConfig::default();
        config.macro_splits.low_carb = MacroSplit::new(0.5, 0.5, 0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_adjustment_signs_rejected() {
        let mut config = FitnessConfig::default();
        config.calorie_adjustments.deficit = 500.0;
        assert!(config.validate().is_err());

        let mut config = FitnessConfig::default();
        config.calorie_adjustments.surplus = -300.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_activity_factor_rejected() {
        let mut config = FitnessConfig::default();
        config.activity_factors.moderate = 0.0;
        assert!(config.validate().is_err());
    }
}

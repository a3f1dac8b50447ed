//! TDEE (Total Daily Energy Expenditure) calculation.
//!
//! TDEE is BMR scaled by a fixed activity multiplier. The activity levels
//! are a closed enumeration: matching is case-insensitive and an unknown
//! key fails with an error listing every valid option.

use std::str::FromStr;

use crate::error::NutritionError;

/// Activity levels and their TDEE multipliers, a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    /// Little or no exercise, desk job.
    Sedentary,
    /// Light exercise/sports 1-3 days/week.
    Light,
    /// Moderate exercise/sports 3-5 days/week.
    Moderate,
    /// Hard exercise/sports 6-7 days/week.
    VeryActive,
    /// Very hard exercise and a physical job, or 2x training.
    ExtraActive,
}

impl ActivityLevel {
    /// Returns all activity level variants.
    pub fn all() -> &'static [ActivityLevel] {
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ]
    }

    /// Returns the lookup key for the level.
    pub fn key(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::VeryActive => "very active",
            ActivityLevel::ExtraActive => "extra active",
        }
    }

    /// Returns the TDEE multiplier for the level.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Formats the valid keys for error messages.
    fn valid_keys() -> String {
        ActivityLevel::all()
            .iter()
            .map(|l| format!("'{}'", l.key()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ActivityLevel {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ActivityLevel::all()
            .iter()
            .find(|l| l.key() == needle)
            .copied()
            .ok_or_else(|| NutritionError::InvalidActivityLevel {
                value: s.to_string(),
                valid: ActivityLevel::valid_keys(),
            })
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Calculates TDEE from BMR and an activity-level key.
///
/// The key is matched case-insensitively against the closed enumeration;
/// an unrecognized key fails with [`NutritionError::InvalidActivityLevel`].
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> Result<f64, NutritionError> {
    let level = ActivityLevel::from_str(activity_level)?;
    Ok(bmr * level.multiplier())
}

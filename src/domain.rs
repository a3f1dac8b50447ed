//! Domain types for user biometrics.

use serde::Serialize;

/// Gender used for BMR formula selection.
///
/// `Other` is an explicit variant, not a parse failure: the Mifflin-St Jeor
/// stage averages the male and female formulas for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Returns the display name for the gender.
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Unit system the user entered their measurements in.
///
/// Anything other than "imperial" reads as metric, matching the lenient
/// behavior of the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl From<&str> for UnitSystem {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "imperial" => UnitSystem::Imperial,
            _ => UnitSystem::Metric,
        }
    }
}

/// Dietary goal, both the user-level field and the per-target macro profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    /// Parses a goal key, returning `None` for unrecognized values.
    pub fn from_key(s: &str) -> Option<Goal> {
        match s.trim().to_lowercase().as_str() {
            "weight_loss" | "weight loss" => Some(Goal::WeightLoss),
            "muscle_gain" | "muscle gain" => Some(Goal::MuscleGain),
            "maintenance" => Some(Goal::Maintenance),
            _ => None,
        }
    }
}

/// User-supplied biometrics, immutable once constructed.
///
/// `weight` and `height` are in whichever system `unit_system` names;
/// conversion to metric happens in the plan assembler. `activity_level`
/// stays a raw key here and is validated by the TDEE stage against the
/// closed [`crate::tdee::ActivityLevel`] enumeration.
#[derive(Debug, Clone)]
pub struct BiometricInput {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: String,
    pub unit_system: UnitSystem,
    pub body_fat_percentage: Option<f64>,
    pub goal: Goal,
}

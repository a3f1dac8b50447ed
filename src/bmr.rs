//! BMR (Basal Metabolic Rate) calculation.
//!
//! Two interchangeable strategies: Mifflin-St Jeor from weight, height, age
//! and gender, and Katch-McArdle from weight and body fat percentage.
//! Katch-McArdle wins unconditionally whenever body fat is known.

use serde::Serialize;

use crate::domain::Gender;

/// Which formula produced a BMR value, reported for display and audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmrMethod {
    #[serde(rename = "Mifflin-St Jeor")]
    MifflinStJeor,
    #[serde(rename = "Katch-McArdle")]
    KatchMcArdle,
}

impl BmrMethod {
    /// Returns the display name for the method.
    pub fn display_name(&self) -> &'static str {
        match self {
            BmrMethod::MifflinStJeor => "Mifflin-St Jeor",
            BmrMethod::KatchMcArdle => "Katch-McArdle",
        }
    }
}

impl std::fmt::Display for BmrMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Calculates BMR using the Mifflin-St Jeor equation.
///
/// Formula:
/// ```text
/// BMR = 10 × weight + 6.25 × height - 5 × age + s
/// ```
/// where s is +5 for men and -161 for women. For any other gender the
/// result is the average of the male and female formulas (a deliberate
/// averaging policy, not a fallback).
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
        Gender::Other => ((base + 5.0) + (base - 161.0)) / 2.0,
    }
}

/// Calculates BMR using the Katch-McArdle formula.
///
/// Formula:
/// ```text
/// BMR = 370 + 21.6 × LBM,  LBM = weight × (1 - bf% / 100)
/// ```
pub fn katch_mcardle(weight_kg: f64, body_fat_pct: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_pct / 100.0);
    370.0 + 21.6 * lean_body_mass
}

/// Calculates BMR, selecting the strategy from input presence.
///
/// Katch-McArdle is used whenever body fat is supplied; Mifflin-St Jeor
/// otherwise. Returns the value together with the method used.
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    body_fat_pct: Option<f64>,
) -> (f64, BmrMethod) {
    match body_fat_pct {
        Some(bf) => (katch_mcardle(weight_kg, bf), BmrMethod::KatchMcArdle),
        None => (
            mifflin_st_jeor(weight_kg, height_cm, age, gender),
            BmrMethod::MifflinStJeor,
        ),
    }
}

//! Macronutrient allocation for a calorie target.
//!
//! Protein scales with lean body mass, fat takes a fixed fraction of the
//! calorie target, and carbohydrates absorb whatever calories remain. The
//! carb remainder can go negative when protein and fat alone exceed a very
//! low target; the negative value is kept as-is since it flags an
//! unreachable target, and clamping would hide that.

use serde::Serialize;

use crate::domain::Goal;

/// Calories per gram of protein and carbohydrate.
pub const CALS_PER_G_PROTEIN: f64 = 4.0;
pub const CALS_PER_G_CARBS: f64 = 4.0;

/// Calories per gram of fat.
pub const CALS_PER_G_FAT: f64 = 9.0;

/// Lean mass fraction assumed when body fat is unknown.
const DEFAULT_LEAN_FRACTION: f64 = 0.8;

/// Macronutrient grams for one calorie target, rounded for display.
///
/// `carbs` may be negative, see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroPlan {
    #[serde(rename = "protein")]
    pub protein_g: i64,
    #[serde(rename = "carbs")]
    pub carbs_g: i64,
    #[serde(rename = "fat")]
    pub fat_g: i64,
}

/// Per-macro calorie counts and percentage shares for display.
///
/// Computed from the already-rounded gram values, so the percentages may
/// not sum to exactly 100. Accepted cosmetic artifact of double rounding.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacroSplit {
    pub protein_calories: i64,
    pub carbs_calories: i64,
    pub fat_calories: i64,
    pub protein_percent: i64,
    pub carbs_percent: i64,
    pub fat_percent: i64,
}

impl MacroPlan {
    /// Calculates the calorie counts and rounded percentage shares of each
    /// macro, for rendering percentage bars.
    pub fn split(&self) -> MacroSplit {
        let protein_calories = self.protein_g * 4;
        let carbs_calories = self.carbs_g * 4;
        let fat_calories = self.fat_g * 9;

        let total = (protein_calories + carbs_calories + fat_calories) as f64;
        let percent = |cals: i64| {
            if total == 0.0 {
                0
            } else {
                (cals as f64 / total * 100.0).round() as i64
            }
        };

        MacroSplit {
            protein_calories,
            carbs_calories,
            fat_calories,
            protein_percent: percent(protein_calories),
            carbs_percent: percent(carbs_calories),
            fat_percent: percent(fat_calories),
        }
    }
}

/// Calculates lean body mass in kg.
///
/// Uses the exact body-fat figure when known, otherwise assumes a fixed
/// 80% lean fraction as a proxy.
pub fn lean_body_mass(weight_kg: f64, body_fat_pct: Option<f64>) -> f64 {
    match body_fat_pct {
        Some(bf) => weight_kg * (1.0 - bf / 100.0),
        None => weight_kg * DEFAULT_LEAN_FRACTION,
    }
}

/// Protein grams per kg of lean body mass for a goal.
fn protein_per_kg_lbm(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 2.2,
        Goal::MuscleGain => 1.8,
        Goal::Maintenance => 1.6,
    }
}

/// Fraction of the calorie target allocated to fat for a goal.
fn fat_fraction(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 0.30,
        Goal::MuscleGain => 0.25,
        Goal::Maintenance => 0.25,
    }
}

/// Calculates the macro allocation for one calorie target.
///
/// Protein is set from lean body mass and the goal, fat from a fixed
/// fraction of the target, and the remaining calories become carbs.
/// All grams are rounded at the end, nowhere in between.
pub fn calculate_macros(
    calorie_target: f64,
    weight_kg: f64,
    body_fat_pct: Option<f64>,
    goal: Goal,
) -> MacroPlan {
    let lbm_kg = lean_body_mass(weight_kg, body_fat_pct);

    let protein_g = lbm_kg * protein_per_kg_lbm(goal);
    let protein_calories = protein_g * CALS_PER_G_PROTEIN;

    let fat_calories = calorie_target * fat_fraction(goal);
    let fat_g = fat_calories / CALS_PER_G_FAT;

    let carb_calories = calorie_target - protein_calories - fat_calories;
    let carbs_g = carb_calories / CALS_PER_G_CARBS;

    MacroPlan {
        protein_g: protein_g.round() as i64,
        carbs_g: carbs_g.round() as i64,
        fat_g: fat_g.round() as i64,
    }
}

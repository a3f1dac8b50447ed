//! Unit conversions between metric and imperial measurements.

use serde::Serialize;

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Converts kilograms to pounds.
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Converts pounds to kilograms.
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Converts centimeters to inches.
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Converts inches to centimeters.
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Body size in one unit system, with unit labels for display.
#[derive(Debug, Clone, Serialize)]
pub struct BodySize {
    pub weight: f64,
    pub height: f64,
    pub weight_unit: &'static str,
    pub height_unit: &'static str,
}

/// Weight and height expressed in both unit systems.
///
/// Derived once from the metric values and never mutated; the plan always
/// exposes both systems regardless of which one the user entered in.
#[derive(Debug, Clone, Serialize)]
pub struct Measurements {
    pub metric: BodySize,
    pub imperial: BodySize,
}

impl Measurements {
    /// Derives both-system measurements from metric weight and height.
    pub fn from_metric(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            metric: BodySize {
                weight: weight_kg,
                height: height_cm,
                weight_unit: "kg",
                height_unit: "cm",
            },
            imperial: BodySize {
                weight: kg_to_lbs(weight_kg),
                height: cm_to_inches(height_cm),
                weight_unit: "lbs",
                height_unit: "inches",
            },
        }
    }
}

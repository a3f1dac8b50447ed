//! Error types for the nutriplan application.

use thiserror::Error;

/// Errors that can occur while computing a nutrition plan.
///
/// The core formulas are total functions over their domains; the only
/// failure mode is an activity-level key outside the closed enumeration.
/// Out-of-range biometrics produce mathematically consistent (if
/// physiologically meaningless) output instead of an error, with sanity
/// checking left to the presentation layer.
#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("invalid activity level '{value}'. Choose from: {valid}")]
    InvalidActivityLevel { value: String, valid: String },
}

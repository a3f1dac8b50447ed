//! Calorie targets for the six goal bands derived from TDEE.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Goal;

/// Hard floor for deficit targets (kcal), a minimum safe intake.
/// Surpluses are never floored or capped.
pub const MIN_DAILY_CALORIES: f64 = 1200.0;

/// The six calorie target bands, a closed enumeration.
///
/// Ordering is the presentation order: maintenance, then deficits from mild
/// to aggressive, then surpluses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetBand {
    Maintenance,
    MildDeficit,
    ModerateDeficit,
    AggressiveDeficit,
    MildSurplus,
    ModerateSurplus,
}

impl TargetBand {
    /// Returns all target band variants.
    pub fn all() -> &'static [TargetBand] {
        &[
            TargetBand::Maintenance,
            TargetBand::MildDeficit,
            TargetBand::ModerateDeficit,
            TargetBand::AggressiveDeficit,
            TargetBand::MildSurplus,
            TargetBand::ModerateSurplus,
        ]
    }

    /// Returns the lookup key for the band.
    pub fn key(&self) -> &'static str {
        match self {
            TargetBand::Maintenance => "maintenance",
            TargetBand::MildDeficit => "mild_deficit",
            TargetBand::ModerateDeficit => "moderate_deficit",
            TargetBand::AggressiveDeficit => "aggressive_deficit",
            TargetBand::MildSurplus => "mild_surplus",
            TargetBand::ModerateSurplus => "moderate_surplus",
        }
    }

    /// Returns the macro-optimization goal for the band.
    ///
    /// Deficit bands optimize for weight loss and surplus bands for muscle
    /// gain, independent of the user's stated overall goal.
    pub fn macro_goal(&self) -> Goal {
        match self {
            TargetBand::Maintenance => Goal::Maintenance,
            TargetBand::MildDeficit
            | TargetBand::ModerateDeficit
            | TargetBand::AggressiveDeficit => Goal::WeightLoss,
            TargetBand::MildSurplus | TargetBand::ModerateSurplus => Goal::MuscleGain,
        }
    }
}

impl std::fmt::Display for TargetBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Calculates the calorie target for one band.
///
/// Deficits are floored at [`MIN_DAILY_CALORIES`]; surpluses are not.
pub fn target_calories(band: TargetBand, tdee: f64) -> f64 {
    match band {
        TargetBand::Maintenance => tdee,
        TargetBand::MildDeficit => (tdee - 250.0).max(MIN_DAILY_CALORIES),
        TargetBand::ModerateDeficit => (tdee - 500.0).max(MIN_DAILY_CALORIES),
        TargetBand::AggressiveDeficit => (tdee - 1000.0).max(MIN_DAILY_CALORIES),
        TargetBand::MildSurplus => tdee + 250.0,
        TargetBand::ModerateSurplus => tdee + 500.0,
    }
}

/// Builds the full map of calorie targets from TDEE.
///
/// Values are left unrounded; rounding happens once at plan assembly to
/// avoid compounding error.
pub fn calorie_targets(tdee: f64) -> BTreeMap<TargetBand, f64> {
    TargetBand::all()
        .iter()
        .map(|band| (*band, target_calories(*band, tdee)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_at_2000() {
        let targets = calorie_targets(2000.0);

        assert_eq!(targets[&TargetBand::Maintenance], 2000.0);
        assert_eq!(targets[&TargetBand::MildDeficit], 1750.0);
        assert_eq!(targets[&TargetBand::ModerateDeficit], 1500.0);
        // max(1000, 1200): floor engaged
        assert_eq!(targets[&TargetBand::AggressiveDeficit], 1200.0);
        assert_eq!(targets[&TargetBand::MildSurplus], 2250.0);
        assert_eq!(targets[&TargetBand::ModerateSurplus], 2500.0);
    }

    #[test]
    fn test_floor_applies_to_every_deficit() {
        let targets = calorie_targets(1300.0);

        assert_eq!(targets[&TargetBand::MildDeficit], 1200.0);
        assert_eq!(targets[&TargetBand::ModerateDeficit], 1200.0);
        assert_eq!(targets[&TargetBand::AggressiveDeficit], 1200.0);
    }

    #[test]
    fn test_surpluses_never_floored() {
        // Even with a TDEE below the floor, surpluses track TDEE directly.
        let targets = calorie_targets(900.0);

        assert_eq!(targets[&TargetBand::MildSurplus], 1150.0);
        assert_eq!(targets[&TargetBand::ModerateSurplus], 1400.0);
    }

    #[test]
    fn test_all_six_bands_present() {
        let targets = calorie_targets(2500.0);
        assert_eq!(targets.len(), 6);
    }

    #[test]
    fn test_macro_goal_follows_band_name() {
        for band in TargetBand::all() {
            let goal = band.macro_goal();
            if band.key().contains("deficit") {
                assert_eq!(goal, Goal::WeightLoss, "band {}", band);
            } else if band.key().contains("surplus") {
                assert_eq!(goal, Goal::MuscleGain, "band {}", band);
            } else {
                assert_eq!(goal, Goal::Maintenance, "band {}", band);
            }
        }
    }

    #[test]
    fn test_band_keys_serialize_snake_case() {
        let json = serde_json::to_string(&TargetBand::ModerateDeficit).unwrap();
        assert_eq!(json, "\"moderate_deficit\"");
    }
}

//! Plan assembly: runs the full calculation pipeline and produces the
//! final [`NutritionPlan`] with display-ready rounding.
//!
//! All intermediate values stay unrounded; rounding happens exactly once
//! here so errors do not compound through the pipeline.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bmr::{BmrMethod, calculate_bmr};
use crate::domain::{BiometricInput, Gender, Goal, UnitSystem};
use crate::error::NutritionError;
use crate::macros::{MacroPlan, calculate_macros};
use crate::targets::{TargetBand, calorie_targets};
use crate::tdee::calculate_tdee;
use crate::units::{Measurements, inches_to_cm, lbs_to_kg};

/// Echo of the user's profile, with measurements in both unit systems.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalInfo {
    pub age: u32,
    pub gender: Gender,
    pub activity_level: String,
    pub body_fat_percentage: Option<f64>,
    pub goal: Goal,
    pub measurements: Measurements,
}

/// BMR and TDEE, rounded for display, with the method that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct MetabolicInfo {
    pub bmr: i64,
    pub bmr_method: BmrMethod,
    pub tdee: i64,
}

/// The complete nutrition plan, the sole output artifact of the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct NutritionPlan {
    pub personal_info: PersonalInfo,
    pub metabolic_info: MetabolicInfo,
    pub calorie_targets: BTreeMap<TargetBand, i64>,
    pub macro_plans: BTreeMap<TargetBand, MacroPlan>,
    pub original_unit_system: UnitSystem,
    pub generated_at: DateTime<Utc>,
}

impl NutritionPlan {
    /// Renders a short prose recap of the plan.
    pub fn summary(&self) -> String {
        let info = &self.personal_info;
        let metric = &self.personal_info.measurements.metric;

        let mut summary = format!(
            "Based on your profile as a {}-year-old {} weighing {:.1} kg with a height \
             of {:.1} cm and {} activity level, your body needs approximately {} calories \
             at rest (BMR) and {} calories daily with your current activity (TDEE).",
            info.age,
            info.gender,
            metric.weight,
            metric.height,
            info.activity_level,
            self.metabolic_info.bmr,
            self.metabolic_info.tdee,
        );

        if let Some(bf) = info.body_fat_percentage {
            summary.push_str(&format!(
                " With your body fat percentage of {}%, your needs were calculated using \
                 the more precise Katch-McArdle formula.",
                bf
            ));
        }

        summary.push_str(&format!(
            " For weight loss, a moderate deficit of {} calories per day would result in \
             approximately 0.5 kg of weight loss per week. For muscle gain, consider a \
             moderate surplus of {} calories daily.",
            self.calorie_targets[&TargetBand::ModerateDeficit],
            self.calorie_targets[&TargetBand::ModerateSurplus],
        ));

        summary
    }
}

/// Runs the full pipeline for one biometric input.
///
/// Converts imperial input to metric, selects and applies the BMR formula,
/// scales to TDEE, builds the six calorie targets, and allocates macros per
/// target with the goal derived from the band (deficits optimize for weight
/// loss, surpluses for muscle gain) regardless of the user's stated goal.
pub fn build_plan(input: &BiometricInput) -> Result<NutritionPlan, NutritionError> {
    // Normalize to metric
    let (weight_kg, height_cm) = match input.unit_system {
        UnitSystem::Imperial => (lbs_to_kg(input.weight), inches_to_cm(input.height)),
        UnitSystem::Metric => (input.weight, input.height),
    };

    let (bmr, bmr_method) = calculate_bmr(
        weight_kg,
        height_cm,
        input.age,
        input.gender,
        input.body_fat_percentage,
    );

    let tdee = calculate_tdee(bmr, &input.activity_level)?;

    let targets = calorie_targets(tdee);

    // Macros are computed from the unrounded calorie values
    let macro_plans: BTreeMap<TargetBand, MacroPlan> = targets
        .iter()
        .map(|(band, calories)| {
            let plan = calculate_macros(
                *calories,
                weight_kg,
                input.body_fat_percentage,
                band.macro_goal(),
            );
            (*band, plan)
        })
        .collect();

    let rounded_targets: BTreeMap<TargetBand, i64> = targets
        .iter()
        .map(|(band, calories)| (*band, calories.round() as i64))
        .collect();

    log::debug!(
        "plan built: bmr={:.1} ({}), tdee={:.1}",
        bmr,
        bmr_method,
        tdee
    );

    Ok(NutritionPlan {
        personal_info: PersonalInfo {
            age: input.age,
            gender: input.gender,
            activity_level: input.activity_level.clone(),
            body_fat_percentage: input.body_fat_percentage,
            goal: input.goal,
            measurements: Measurements::from_metric(weight_kg, height_cm),
        },
        metabolic_info: MetabolicInfo {
            bmr: bmr.round() as i64,
            bmr_method,
            tdee: tdee.round() as i64,
        },
        calorie_targets: rounded_targets,
        macro_plans,
        original_unit_system: input.unit_system,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::{CALS_PER_G_CARBS, CALS_PER_G_FAT, CALS_PER_G_PROTEIN};

    fn base_input() -> BiometricInput {
        BiometricInput {
            weight: 70.0,
            height: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: "sedentary".to_string(),
            unit_system: UnitSystem::Metric,
            body_fat_percentage: None,
            goal: Goal::WeightLoss,
        }
    }

    #[test]
    fn test_plan_metric_reference_values() {
        let plan = build_plan(&base_input()).unwrap();

        // BMR 1673.75 → 1674, TDEE 2008.5 → 2009 (rounded from unrounded BMR)
        assert_eq!(plan.metabolic_info.bmr, 1674);
        assert_eq!(plan.metabolic_info.bmr_method, BmrMethod::MifflinStJeor);
        assert_eq!(plan.metabolic_info.tdee, 2009);

        // Targets rounded from the unrounded TDEE of 2008.5
        assert_eq!(plan.calorie_targets[&TargetBand::Maintenance], 2009);
        assert_eq!(plan.calorie_targets[&TargetBand::ModerateDeficit], 1509);
        assert_eq!(plan.calorie_targets[&TargetBand::MildSurplus], 2259);
    }

    #[test]
    fn test_plan_imperial_input_converted() {
        let mut input = base_input();
        input.unit_system = UnitSystem::Imperial;
        input.weight = 154.324; // ≈ 70 kg
        input.height = 68.897; // ≈ 175 cm

        let plan = build_plan(&input).unwrap();

        let metric = &plan.personal_info.measurements.metric;
        assert!((metric.weight - 70.0).abs() < 0.01, "kg = {}", metric.weight);
        assert!((metric.height - 175.0).abs() < 0.01, "cm = {}", metric.height);
        assert_eq!(plan.original_unit_system, UnitSystem::Imperial);

        // BMR within a calorie of the metric reference
        assert!((plan.metabolic_info.bmr - 1674).abs() <= 1);
    }

    #[test]
    fn test_plan_measurements_always_in_both_systems() {
        let plan = build_plan(&base_input()).unwrap();
        let m = &plan.personal_info.measurements;

        assert!((m.imperial.weight - 154.3234).abs() < 0.01);
        assert!((m.imperial.height - 68.8976).abs() < 0.01);
    }

    #[test]
    fn test_plan_body_fat_switches_method() {
        let mut input = base_input();
        input.body_fat_percentage = Some(20.0);

        let plan = build_plan(&input).unwrap();

        assert_eq!(plan.metabolic_info.bmr_method, BmrMethod::KatchMcArdle);
        // 370 + 21.6 × 56 = 1579.6 → 1580
        assert_eq!(plan.metabolic_info.bmr, 1580);
    }

    #[test]
    fn test_plan_invalid_activity_level_propagates() {
        let mut input = base_input();
        input.activity_level = "heroic".to_string();

        let err = build_plan(&input).unwrap_err();
        assert!(matches!(err, NutritionError::InvalidActivityLevel { .. }));
    }

    #[test]
    fn test_deficit_bands_use_weight_loss_macros_regardless_of_user_goal() {
        // The user says muscle gain, but deficit bands must still get the
        // weight-loss protein allocation (2.2 g/kg LBM).
        let mut input = base_input();
        input.goal = Goal::MuscleGain;

        let plan = build_plan(&input).unwrap();

        // LBM = 56kg → weight-loss protein 123.2 → 123g on every deficit band
        for band in [
            TargetBand::MildDeficit,
            TargetBand::ModerateDeficit,
            TargetBand::AggressiveDeficit,
        ] {
            assert_eq!(plan.macro_plans[&band].protein_g, 123, "band {}", band);
        }
        // Surplus bands get muscle-gain protein: 56 × 1.8 = 100.8 → 101g
        assert_eq!(plan.macro_plans[&TargetBand::MildSurplus].protein_g, 101);
        // Maintenance: 56 × 1.6 = 89.6 → 90g
        assert_eq!(plan.macro_plans[&TargetBand::Maintenance].protein_g, 90);
    }

    #[test]
    fn test_plan_energy_balance_per_band() {
        let plan = build_plan(&base_input()).unwrap();

        for (band, macros) in &plan.macro_plans {
            let total = macros.protein_g as f64 * CALS_PER_G_PROTEIN
                + macros.fat_g as f64 * CALS_PER_G_FAT
                + macros.carbs_g as f64 * CALS_PER_G_CARBS;
            let target = plan.calorie_targets[band] as f64;
            // Half a gram of rounding per macro plus the rounded target itself
            assert!(
                (total - target).abs() <= 9.0,
                "band {}: total {} vs target {}",
                band,
                total,
                target
            );
        }
    }

    #[test]
    fn test_plan_json_shape() {
        let plan = build_plan(&base_input()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert!(json["personal_info"]["measurements"]["metric"]["weight"].is_number());
        assert_eq!(json["personal_info"]["measurements"]["metric"]["weight_unit"], "kg");
        assert_eq!(json["metabolic_info"]["bmr_method"], "Mifflin-St Jeor");
        assert!(json["calorie_targets"]["moderate_deficit"].is_number());
        assert!(json["macro_plans"]["mild_surplus"]["protein"].is_number());
        assert_eq!(json["original_unit_system"], "metric");
    }

    #[test]
    fn test_summary_mentions_key_figures() {
        let plan = build_plan(&base_input()).unwrap();
        let summary = plan.summary();

        assert!(summary.contains("30-year-old male"));
        assert!(summary.contains("1674"));
        assert!(summary.contains("2009"));
        assert!(!summary.contains("Katch-McArdle"));

        let mut input = base_input();
        input.body_fat_percentage = Some(18.0);
        let plan = build_plan(&input).unwrap();
        assert!(plan.summary().contains("Katch-McArdle"));
    }
}

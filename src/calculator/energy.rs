//! Energy calculations
//!
//! BMI, basal metabolic rate (Mifflin-St Jeor), total daily energy
//! expenditure and the goal-based calorie target.

use super::units::CM_PER_M;
use crate::models::{AnthropometricInput, BmiCategory, EnergyProfile, Goal, Sex};

/// Fraction of TDEE removed for weight loss or added for muscle gain
pub const GOAL_ADJUSTMENT: f64 = 0.20;

/// Calorie target for a goal, with its human-readable explanation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalAdjustment {
    pub daily_calories: f64,
    pub description: &'static str,
}

/// BMI = weight (kg) / height (m)^2
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_M;
    weight_kg / (height_m * height_m)
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Apply the goal's fixed percentage of TDEE
pub fn adjust_for_goal(tdee: f64, goal: Goal) -> GoalAdjustment {
    match goal {
        Goal::Lose => GoalAdjustment {
            daily_calories: tdee * (1.0 - GOAL_ADJUSTMENT),
            description: "20% deficit for weight loss",
        },
        Goal::Gain => GoalAdjustment {
            daily_calories: tdee * (1.0 + GOAL_ADJUSTMENT),
            description: "20% surplus for muscle gain",
        },
        Goal::Maintain => GoalAdjustment {
            daily_calories: tdee,
            description: "Maintenance",
        },
    }
}

/// Run the energy half of the pipeline
pub fn energy_profile(input: &AnthropometricInput) -> EnergyProfile {
    let bmi = calculate_bmi(input.weight_kg(), input.height_cm());
    let bmr = calculate_bmr(input.weight_kg(), input.height_cm(), input.age_years(), input.sex());
    let tdee = calculate_tdee(bmr, input.activity_factor());
    let adjustment = adjust_for_goal(tdee, input.goal());

    tracing::debug!(bmi, bmr, tdee, daily_calories = adjustment.daily_calories, "energy profile");

    EnergyProfile {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        bmr,
        tdee,
        daily_calories: adjustment.daily_calories,
        adjustment_description: adjustment.description.to_string(),
    }
}

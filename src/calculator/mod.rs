//! Body-metrics calculator
//!
//! Validated input -> BMI -> BMR -> TDEE -> calorie target -> macro split,
//! plus meal-plan generation from the resulting daily totals.

pub mod body;
pub mod energy;
pub mod macros;
pub mod meal_plan;
pub mod units;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::models::{AnthropometricInput, CalculatorResult, MealPlanRow, MealTargets, RawCalculatorInput};

pub use body::{ideal_weight, muscle_potential};
pub use energy::{adjust_for_goal, calculate_bmi, calculate_bmr, calculate_tdee, energy_profile};
pub use macros::{calculate_macros, protein_range, CarbPolicy, MacroPolicy};
pub use meal_plan::{generate_meal_plan, meal_distribution, MealRounding};
pub use units::{HeightUnit, WeightUnit};
pub use validation::{validate, validate_meal_targets, validate_typed, ValidationError};

/// Policies for the two places the calculator has a choice to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorOptions {
    pub carb_policy: CarbPolicy,
    pub meal_rounding: MealRounding,
}

/// Run the full pipeline on validated input
pub fn calculate(input: &AnthropometricInput, options: &CalculatorOptions) -> CalculatorResult {
    let energy = energy_profile(input);
    let macros = calculate_macros(
        energy.daily_calories,
        input.goal(),
        input.weight_kg(),
        options.carb_policy,
    );

    CalculatorResult {
        macros,
        ideal_weight: ideal_weight(input.height_cm(), input.sex()),
        muscle_potential: muscle_potential(input.height_cm()),
        protein_range: protein_range(input.weight_kg()),
        goal: input.goal(),
        energy,
    }
}

/// Validate a raw form and run the pipeline; nothing is computed on rejection
pub fn calculate_raw(
    raw: &RawCalculatorInput,
    options: &CalculatorOptions,
) -> Result<CalculatorResult, ValidationError> {
    let input = validate(raw).map_err(|e| {
        tracing::warn!(error = %e, "Calculator input rejected");
        e
    })?;
    let result = calculate(&input, options);
    tracing::info!(
        goal = input.goal().as_str(),
        daily_calories = result.energy.daily_calories,
        "Calculation completed"
    );
    Ok(result)
}

/// Meal plan for a previous result
pub fn meal_plan_for(result: &CalculatorResult, options: &CalculatorOptions) -> Vec<MealPlanRow> {
    generate_meal_plan(&result.meal_targets(), options.meal_rounding)
}

/// Meal plan for explicit daily totals
pub fn meal_plan_for_targets(targets: &MealTargets, options: &CalculatorOptions) -> Vec<MealPlanRow> {
    generate_meal_plan(targets, options.meal_rounding)
}

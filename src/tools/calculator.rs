//! Calculator MCP Tools
//!
//! Tool functions over a `CalculatorSession`, returning serializable responses.

use serde::Serialize;

use crate::calculator::units::round_to_i64;
use crate::calculator::{self, CalculatorOptions};
use crate::models::{ActivityLevel, CalculatorResult, Goal, MealPlanRow, MealTargets, RawCalculatorInput};
use crate::session::{CalculatorSession, SessionError, UiState};

// ============================================================================
// Response Structs
// ============================================================================

/// Values formatted the way the result card shows them
#[derive(Debug, Serialize, PartialEq)]
pub struct DisplayValues {
    pub bmi: String,
    pub bmr: String,
    pub ideal_weight: String,
    pub muscle_potential: String,
    pub daily_calories: String,
    pub protein_range: String,
}

impl DisplayValues {
    pub fn from_result(result: &CalculatorResult) -> Self {
        Self {
            bmi: format!("{:.1}", result.energy.bmi),
            bmr: round_to_i64(result.energy.bmr).to_string(),
            ideal_weight: format!("{:.1}", result.ideal_weight),
            muscle_potential: format!(
                "{:.1} - {:.1}",
                result.muscle_potential.lower, result.muscle_potential.upper
            ),
            daily_calories: round_to_i64(result.energy.daily_calories).to_string(),
            protein_range: format!("{} - {}", result.protein_range.min, result.protein_range.max),
        }
    }
}

/// Response for calculate_macros
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    #[serde(flatten)]
    pub result: CalculatorResult,
    pub display: DisplayValues,
}

/// Per-nutrient sums across meal slots
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NutrientTotals {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
}

impl NutrientTotals {
    fn of_rows(rows: &[MealPlanRow]) -> Self {
        rows.iter().fold(
            NutrientTotals { calories: 0, protein: 0, carbs: 0, fats: 0 },
            |acc, r| NutrientTotals {
                calories: acc.calories.saturating_add(r.calories),
                protein: acc.protein.saturating_add(r.protein),
                carbs: acc.carbs.saturating_add(r.carbs),
                fats: acc.fats.saturating_add(r.fats),
            },
        )
    }

    fn of_targets(targets: &MealTargets) -> Self {
        NutrientTotals {
            calories: round_to_i64(targets.daily_calories),
            protein: targets.protein,
            carbs: targets.carbs,
            fats: targets.fats,
        }
    }

    fn minus(&self, other: &NutrientTotals) -> Self {
        NutrientTotals {
            calories: self.calories.saturating_sub(other.calories),
            protein: self.protein.saturating_sub(other.protein),
            carbs: self.carbs.saturating_sub(other.carbs),
            fats: self.fats.saturating_sub(other.fats),
        }
    }
}

/// Response for generate_meal_plan
#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    pub goal: Goal,
    pub rounding: &'static str,
    pub meals: Vec<MealPlanRow>,
    pub targets: NutrientTotals,
    pub totals: NutrientTotals,
    /// totals minus targets; non-zero only with independent rounding
    pub rounding_drift: NutrientTotals,
}

#[derive(Debug, Serialize)]
pub struct ActivityLevelInfo {
    pub name: &'static str,
    pub factor: f64,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ListActivityLevelsResponse {
    pub levels: Vec<ActivityLevelInfo>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub state: &'static str,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Validate, calculate and keep the result on the session
///
/// A fresh form is opened for editing first; after a rejected submit the
/// session is already editing and the corrected form is submitted directly.
pub fn calculate_macros(
    session: &mut CalculatorSession,
    raw: &RawCalculatorInput,
    options: &CalculatorOptions,
) -> Result<CalculateResponse, SessionError> {
    if !matches!(session.state(), UiState::Editing) {
        session.begin_edit()?;
    }
    let result = session.submit(raw, options)?.clone();
    let display = DisplayValues::from_result(&result);
    Ok(CalculateResponse { result, display })
}

/// Meal plan for explicit targets, or for the session's last result
pub fn generate_meal_plan(
    session: &CalculatorSession,
    targets: Option<MealTargets>,
    options: &CalculatorOptions,
) -> Result<MealPlanResponse, SessionError> {
    let targets = match targets {
        Some(t) => {
            calculator::validate_meal_targets(&t)?;
            t
        }
        None => session
            .last_result()
            .map(CalculatorResult::meal_targets)
            .ok_or(SessionError::NoResult)?,
    };

    let meals = calculator::meal_plan_for_targets(&targets, options);
    let target_totals = NutrientTotals::of_targets(&targets);
    let totals = NutrientTotals::of_rows(&meals);

    tracing::info!(goal = targets.goal.as_str(), meals = meals.len(), "Meal plan generated");

    Ok(MealPlanResponse {
        goal: targets.goal,
        rounding: options.meal_rounding.as_str(),
        rounding_drift: totals.minus(&target_totals),
        targets: target_totals,
        totals,
        meals,
    })
}

pub fn list_activity_levels() -> ListActivityLevelsResponse {
    ListActivityLevelsResponse {
        levels: ActivityLevel::ALL
            .iter()
            .map(|level| ActivityLevelInfo {
                name: level.as_str(),
                factor: level.factor(),
                description: level.description(),
            })
            .collect(),
    }
}

pub fn reset_calculator(session: &mut CalculatorSession) -> ResetResponse {
    session.reset();
    ResetResponse {
        success: true,
        state: session.state().name(),
    }
}

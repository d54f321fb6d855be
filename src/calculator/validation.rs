//! Input validation
//!
//! Turns a raw calculator form into an `AnthropometricInput`, or reports the
//! first problem found. Unit names are checked first, then the fields in form
//! order: weight, height, age, sex, activity, goal.

use thiserror::Error;

use super::units::{HeightUnit, WeightUnit};
use crate::models::{
    ActivityLevel, AnthropometricInput, Goal, MealTargets, RawCalculatorInput, RawValue, Sex,
};

/// Upper bounds on what a human body can measure
pub const MAX_WEIGHT_KG: f64 = 650.0;
pub const MAX_HEIGHT_CM: f64 = 280.0;
pub const MAX_AGE_YEARS: u32 = 130;
pub const MAX_ACTIVITY_FACTOR: f64 = 3.0;

/// Bounds on explicit meal-plan targets
pub const MAX_DAILY_CALORIES: f64 = 50_000.0;
pub const MAX_NUTRIENT_GRAMS: i64 = 10_000;

/// Reasons a calculator form is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {field} is missing")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a whole number, got {value}")]
    NotWholeNumber { field: &'static str, value: f64 },

    #[error("Unknown sex '{0}'. Valid values: male, female")]
    UnknownSex(String),

    #[error("Unknown goal '{0}'. Valid values: lose, maintain, gain")]
    UnknownGoal(String),

    #[error("Unknown {field} '{unit}'")]
    UnknownUnit { field: &'static str, unit: String },
}

/// Validate a raw form
pub fn validate(raw: &RawCalculatorInput) -> Result<AnthropometricInput, ValidationError> {
    let weight_unit = match raw.weight_unit.as_deref() {
        None => WeightUnit::default(),
        Some(u) => WeightUnit::from_str(u).ok_or_else(|| ValidationError::UnknownUnit {
            field: "weight_unit",
            unit: u.to_string(),
        })?,
    };
    let height_unit = match raw.height_unit.as_deref() {
        None => HeightUnit::default(),
        Some(u) => HeightUnit::from_str(u).ok_or_else(|| ValidationError::UnknownUnit {
            field: "height_unit",
            unit: u.to_string(),
        })?,
    };

    // Bounds apply after conversion to kg and cm
    let weight_kg = weight_unit.to_kg(positive_number("weight", raw.weight.as_ref())?);
    let weight_kg = at_most("weight", weight_kg, MAX_WEIGHT_KG)?;
    let height_cm = height_unit.to_cm(positive_number("height", raw.height.as_ref())?);
    let height_cm = at_most("height", height_cm, MAX_HEIGHT_CM)?;
    let age = whole_number("age", raw.age.as_ref())?;
    let age = at_most("age", age as f64, MAX_AGE_YEARS as f64)? as u32;
    let sex = sex(raw.sex.as_deref())?;
    let activity_factor = at_most("activity", activity_factor(raw.activity.as_ref())?, MAX_ACTIVITY_FACTOR)?;
    let goal = goal(raw.goal.as_deref())?;

    Ok(AnthropometricInput::from_validated(
        weight_kg,
        height_cm,
        age,
        sex,
        activity_factor,
        goal,
    ))
}

/// Validate already-typed values, as a library caller would supply them
pub fn validate_typed(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity_factor: f64,
    goal: Goal,
) -> Result<AnthropometricInput, ValidationError> {
    let weight_kg = at_most("weight", require_positive("weight", weight_kg)?, MAX_WEIGHT_KG)?;
    let height_cm = at_most("height", require_positive("height", height_cm)?, MAX_HEIGHT_CM)?;
    if age_years == 0 {
        return Err(ValidationError::NotPositive { field: "age", value: 0.0 });
    }
    at_most("age", age_years as f64, MAX_AGE_YEARS as f64)?;
    let activity_factor = at_most(
        "activity",
        require_positive("activity", activity_factor)?,
        MAX_ACTIVITY_FACTOR,
    )?;

    Ok(AnthropometricInput::from_validated(
        weight_kg,
        height_cm,
        age_years,
        sex,
        activity_factor,
        goal,
    ))
}

/// Check explicit daily targets before they are split into meals
///
/// Carbohydrates may be negative, as the macro split can produce them.
pub fn validate_meal_targets(targets: &MealTargets) -> Result<(), ValidationError> {
    let daily = require_positive("daily_calories", targets.daily_calories)?;
    at_most("daily_calories", daily, MAX_DAILY_CALORIES)?;

    let grams = MAX_NUTRIENT_GRAMS as f64;
    for (field, value, min) in [
        ("protein", targets.protein, 0.0),
        ("carbs", targets.carbs, -grams),
        ("fats", targets.fats, 0.0),
    ] {
        let value = value as f64;
        if value < min || value > grams {
            return Err(ValidationError::OutOfRange { field, value, min, max: grams });
        }
    }
    Ok(())
}

fn at_most(field: &'static str, value: f64, max: f64) -> Result<f64, ValidationError> {
    if value > max {
        return Err(ValidationError::OutOfRange { field, value, min: 0.0, max });
    }
    Ok(value)
}

fn number(field: &'static str, value: Option<&RawValue>) -> Result<f64, ValidationError> {
    let parsed = match value {
        None => return Err(ValidationError::Missing { field }),
        Some(RawValue::Number(n)) => *n,
        Some(RawValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::Missing { field });
            }
            trimmed.parse::<f64>().map_err(|_| ValidationError::NotNumeric {
                field,
                value: s.clone(),
            })?
        }
    };

    if !parsed.is_finite() {
        return Err(ValidationError::NotNumeric {
            field,
            value: parsed.to_string(),
        });
    }
    Ok(parsed)
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotNumeric {
            field,
            value: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}

fn positive_number(field: &'static str, value: Option<&RawValue>) -> Result<f64, ValidationError> {
    require_positive(field, number(field, value)?)
}

fn whole_number(field: &'static str, value: Option<&RawValue>) -> Result<u32, ValidationError> {
    let n = positive_number(field, value)?;
    if n.fract() != 0.0 || n > u32::MAX as f64 {
        return Err(ValidationError::NotWholeNumber { field, value: n });
    }
    Ok(n as u32)
}

fn sex(value: Option<&str>) -> Result<Sex, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Err(ValidationError::Missing { field: "sex" }),
        Some(s) => Sex::from_str(s).ok_or_else(|| ValidationError::UnknownSex(s.to_string())),
    }
}

fn goal(value: Option<&str>) -> Result<Goal, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Err(ValidationError::Missing { field: "goal" }),
        Some(s) => Goal::from_str(s).ok_or_else(|| ValidationError::UnknownGoal(s.to_string())),
    }
}

/// Numeric factor, numeric string, or preset name
fn activity_factor(value: Option<&RawValue>) -> Result<f64, ValidationError> {
    if let Some(RawValue::Text(s)) = value {
        if let Some(level) = ActivityLevel::from_str(s) {
            return Ok(level.factor());
        }
    }
    positive_number("activity", value)
}

//! Unit types and conversion constants
//!
//! Body-measurement units accepted on input, energy densities of the
//! macronutrients, and the rounding rule used for every displayed integer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound (exact)
pub const KG_PER_LB: f64 = 0.45359237;
/// Centimeters per inch (exact)
pub const CM_PER_INCH: f64 = 2.54;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

// ============================================================================
// Atwater Factors (kcal per gram)
// ============================================================================

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Unit a body weight is given in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Lb),
            _ => None,
        }
    }

    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lb => value * KG_PER_LB,
        }
    }
}

/// Unit a height is given in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    In,
}

impl HeightUnit {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Some(HeightUnit::Cm),
            "in" | "inch" | "inches" => Some(HeightUnit::In),
            _ => None,
        }
    }

    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::In => value * CM_PER_INCH,
        }
    }
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Round to the nearest integer, halves toward positive infinity
///
/// `f64::round` sends -2.5 to -3; the dashboard rounds it to -2, which only
/// matters for negative carbohydrate remainders.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// `round_half_up` as a whole number of grams or calories
pub fn round_to_i64(value: f64) -> i64 {
    round_half_up(value) as i64
}

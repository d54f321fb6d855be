//! Macronutrient targets
//!
//! Gram-level daily targets and the informational body targets shown next to them.

use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in grams
///
/// Carbohydrates are the calorie remainder and can be negative at very low
/// calorie targets unless the carb policy clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
}

/// Recommended daily protein intake range in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRange {
    pub min: i64,
    pub max: i64,
}

/// Maximum natural muscular-potential bodyweight range in kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MusclePotential {
    pub lower: f64,
    pub upper: f64,
}

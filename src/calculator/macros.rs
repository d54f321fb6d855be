//! Macronutrient split
//!
//! Protein is set per kilogram of bodyweight, fat as a share of the calorie
//! target, and carbohydrates take whatever calories remain.

use serde::{Deserialize, Serialize};

use super::units::{round_to_i64, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::models::{Goal, MacroSplit, ProteinRange};

/// Lower and upper bounds of the recommended protein range, g/kg
pub const PROTEIN_RANGE_G_PER_KG: (f64, f64) = (1.6, 2.2);

/// Per-goal protein and fat allocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroPolicy {
    pub protein_g_per_kg: f64,
    pub fat_fraction: f64,
}

impl MacroPolicy {
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Lose => MacroPolicy { protein_g_per_kg: 2.0, fat_fraction: 0.30 },
            Goal::Gain => MacroPolicy { protein_g_per_kg: 1.8, fat_fraction: 0.25 },
            Goal::Maintain => MacroPolicy { protein_g_per_kg: 1.1, fat_fraction: 0.30 },
        }
    }
}

/// What to do when protein and fat already exceed the calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarbPolicy {
    /// Report the negative remainder as-is
    #[default]
    Preserve,
    /// Floor carbohydrates at zero grams
    ClampAtZero,
}

impl CarbPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarbPolicy::Preserve => "preserve",
            CarbPolicy::ClampAtZero => "clamp",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "preserve" | "signed" => Some(CarbPolicy::Preserve),
            "clamp" | "clamp_at_zero" | "floor" => Some(CarbPolicy::ClampAtZero),
            _ => None,
        }
    }
}

/// Split a daily calorie target into gram targets
pub fn calculate_macros(
    daily_calories: f64,
    goal: Goal,
    weight_kg: f64,
    carb_policy: CarbPolicy,
) -> MacroSplit {
    let policy = MacroPolicy::for_goal(goal);

    let protein = round_to_i64(weight_kg * policy.protein_g_per_kg);
    let fat_calories = daily_calories * policy.fat_fraction;
    let fats = round_to_i64(fat_calories / KCAL_PER_G_FAT);

    // Remainder uses rounded protein grams but unrounded fat calories
    let carb_calories = daily_calories - protein as f64 * KCAL_PER_G_PROTEIN - fat_calories;
    let mut carbs = round_to_i64(carb_calories / KCAL_PER_G_CARBS);

    if carbs < 0 {
        tracing::warn!(
            daily_calories,
            protein,
            fats,
            carbs,
            "Protein and fat allocation exceeds the calorie target"
        );
        if carb_policy == CarbPolicy::ClampAtZero {
            carbs = 0;
        }
    }

    MacroSplit { protein, carbs, fats }
}

/// Recommended daily protein range for a bodyweight
pub fn protein_range(weight_kg: f64) -> ProteinRange {
    let (low, high) = PROTEIN_RANGE_G_PER_KG;
    ProteinRange {
        min: round_to_i64(weight_kg * low),
        max: round_to_i64(weight_kg * high),
    }
}

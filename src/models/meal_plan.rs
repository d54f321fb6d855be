//! Meal plan models
//!
//! Named daily meal slots, each carrying a fraction of the daily totals.

use serde::{Deserialize, Serialize};

use super::{Goal, MacroSplit};

/// One meal slot with its share of each daily total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealAllocation {
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MealAllocation {
    /// Slot where every nutrient gets the same share
    pub const fn uniform(name: &'static str, share: f64) -> Self {
        Self {
            name,
            calories: share,
            protein: share,
            carbs: share,
            fats: share,
        }
    }
}

/// Ordered meal layout for a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealPlan {
    pub goal: Goal,
    pub allocations: &'static [MealAllocation],
}

/// Daily totals a meal plan is generated from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealTargets {
    pub daily_calories: f64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
    pub goal: Goal,
}

impl MealTargets {
    pub fn new(daily_calories: f64, macros: MacroSplit, goal: Goal) -> Self {
        Self {
            daily_calories,
            protein: macros.protein,
            carbs: macros.carbs,
            fats: macros.fats,
            goal,
        }
    }
}

/// One rendered meal-plan line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanRow {
    pub name: String,
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
}

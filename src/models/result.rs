//! Calculator result record
//!
//! Everything one calculator run produces for display.

use serde::{Deserialize, Serialize};

use super::{EnergyProfile, Goal, MacroSplit, MealTargets, MusclePotential, ProteinRange};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    #[serde(flatten)]
    pub energy: EnergyProfile,
    pub macros: MacroSplit,
    pub ideal_weight: f64,
    pub muscle_potential: MusclePotential,
    pub protein_range: ProteinRange,
    pub goal: Goal,
}

impl CalculatorResult {
    /// Totals to feed into meal-plan generation
    pub fn meal_targets(&self) -> MealTargets {
        MealTargets::new(self.energy.daily_calories, self.macros, self.goal)
    }
}

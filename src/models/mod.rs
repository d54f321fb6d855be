//! Data models
//!
//! Transient value records produced and consumed by the calculator.

mod energy;
mod input;
mod macros;
mod meal_plan;
mod result;

pub use energy::{BmiCategory, EnergyProfile};
pub use input::{ActivityLevel, AnthropometricInput, Goal, RawCalculatorInput, RawValue, Sex};
pub use macros::{MacroSplit, MusclePotential, ProteinRange};
pub use meal_plan::{MealAllocation, MealPlan, MealPlanRow, MealTargets};
pub use result::CalculatorResult;

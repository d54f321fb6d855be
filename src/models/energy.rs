//! Energy profile model
//!
//! BMI classification and the daily energy figures derived from it.

use serde::{Deserialize, Serialize};

/// BMI band, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiCategory {
    /// Classify a BMI value; each threshold is an exclusive upper bound
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObesityI
        } else if bmi < 40.0 {
            BmiCategory::ObesityII
        } else {
            BmiCategory::ObesityIII
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityI => "Obesity I",
            BmiCategory::ObesityII => "Obesity II",
            BmiCategory::ObesityIII => "Obesity III",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Energy figures for one calculator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,          // kcal/day
    pub tdee: f64,         // kcal/day
    pub daily_calories: f64,
    pub adjustment_description: String,
}

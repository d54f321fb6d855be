//! Calculator input models
//!
//! Raw form values as they arrive from a caller, and the validated
//! anthropometric record the calculator works on.

use serde::{Deserialize, Serialize};

/// Biological sex used by the Mifflin-St Jeor and Robinson formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Some(Sex::Male),
            "female" | "f" | "woman" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Body-composition goal driving calorie adjustment, macro policy and meal layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "loss" | "cut" => Some(Goal::Lose),
            "maintain" | "maintenance" => Some(Goal::Maintain),
            "gain" | "bulk" => Some(Goal::Gain),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Lose => "Weight loss",
            Goal::Maintain => "Maintenance",
            Goal::Gain => "Muscle gain",
        }
    }
}

/// Named activity-factor presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Some(ActivityLevel::Light),
            "moderate" | "moderately_active" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" | "extra_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    /// TDEE multiplier applied to BMR
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

/// A loosely-typed form value: either a JSON number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Convert a JSON value, mapping `null` to `None`
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Number(n) => Some(match n.as_f64() {
                Some(f) => RawValue::Number(f),
                None => RawValue::Text(n.to_string()),
            }),
            serde_json::Value::String(s) => Some(RawValue::Text(s)),
            other => Some(RawValue::Text(other.to_string())),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// Unvalidated calculator form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCalculatorInput {
    pub weight: Option<RawValue>,
    pub height: Option<RawValue>,
    pub age: Option<RawValue>,
    pub sex: Option<String>,
    /// Numeric factor or an activity preset name
    pub activity: Option<RawValue>,
    pub goal: Option<String>,
    /// "kg" (default) or "lb"
    pub weight_unit: Option<String>,
    /// "cm" (default) or "in"
    pub height_unit: Option<String>,
}

/// Validated anthropometric data, always in metric units
///
/// Only constructed through validation, so every instance holds positive,
/// finite measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnthropometricInput {
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity_factor: f64,
    goal: Goal,
}

impl AnthropometricInput {
    pub(crate) fn from_validated(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
        activity_factor: f64,
        goal: Goal,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_factor,
            goal,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn activity_factor(&self) -> f64 {
        self.activity_factor
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!(Sex::from_str("male"), Some(Sex::Male));
        assert_eq!(Sex::from_str(" Female "), Some(Sex::Female));
        assert_eq!(Sex::from_str("M"), Some(Sex::Male));
        assert_eq!(Sex::from_str("other"), None);
        assert_eq!(Sex::from_str(""), None);
    }

    #[test]
    fn test_goal_from_str() {
        assert_eq!(Goal::from_str("lose"), Some(Goal::Lose));
        assert_eq!(Goal::from_str("MAINTAIN"), Some(Goal::Maintain));
        assert_eq!(Goal::from_str("bulk"), Some(Goal::Gain));
        assert_eq!(Goal::from_str("recomp"), None);
    }

    #[test]
    fn test_activity_level_aliases() {
        assert_eq!(ActivityLevel::from_str("very-active"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::from_str("Moderately Active"), Some(ActivityLevel::Moderate));
        assert_eq!(ActivityLevel::from_str("couch"), None);
        assert_eq!(ActivityLevel::Moderate.factor(), 1.55);
    }

    #[test]
    fn test_raw_value_from_json() {
        assert_eq!(RawValue::from_json(serde_json::json!(70.5)), Some(RawValue::Number(70.5)));
        assert_eq!(RawValue::from_json(serde_json::json!("70")), Some(RawValue::Text("70".into())));
        assert_eq!(RawValue::from_json(serde_json::Value::Null), None);
        assert_eq!(
            RawValue::from_json(serde_json::json!(true)),
            Some(RawValue::Text("true".into()))
        );
    }

    #[test]
    fn test_raw_input_deserializes_mixed_values() {
        let raw: RawCalculatorInput = serde_json::from_str(
            r#"{"weight": 70, "height": "175", "age": 30, "sex": "male", "activity": "moderate", "goal": "maintain"}"#,
        )
        .unwrap();
        assert_eq!(raw.weight, Some(RawValue::Number(70.0)));
        assert_eq!(raw.height, Some(RawValue::Text("175".into())));
        assert_eq!(raw.activity, Some(RawValue::Text("moderate".into())));
        assert_eq!(raw.weight_unit, None);
    }
}

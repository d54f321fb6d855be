//! Runtime configuration
//!
//! Read from environment variables at startup.

use serde::Serialize;
use thiserror::Error;

use crate::calculator::{CalculatorOptions, CarbPolicy, MealRounding};

pub const CARB_POLICY_VAR: &str = "FITCALC_CARB_POLICY";
pub const MEAL_ROUNDING_VAR: &str = "FITCALC_MEAL_ROUNDING";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var} '{value}'. Valid values: {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Config {
    pub carb_policy: CarbPolicy,
    pub meal_rounding: MealRounding,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup; unset or blank keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let carb_policy = match read(CARB_POLICY_VAR) {
            None => CarbPolicy::default(),
            Some(v) => CarbPolicy::from_str(&v).ok_or(ConfigError::InvalidValue {
                var: CARB_POLICY_VAR,
                value: v,
                expected: "preserve, clamp",
            })?,
        };

        let meal_rounding = match read(MEAL_ROUNDING_VAR) {
            None => MealRounding::default(),
            Some(v) => MealRounding::from_str(&v).ok_or(ConfigError::InvalidValue {
                var: MEAL_ROUNDING_VAR,
                value: v,
                expected: "independent, reconcile",
            })?,
        };

        Ok(Self {
            carb_policy,
            meal_rounding,
        })
    }

    pub fn calculator_options(&self) -> CalculatorOptions {
        CalculatorOptions {
            carb_policy: self.carb_policy,
            meal_rounding: self.meal_rounding,
        }
    }
}

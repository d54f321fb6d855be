//! fitcalc Status Tool
//!
//! Runtime status of the service and the usage guide for LLM clients.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::session::CalculatorSession;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# fitcalc Calculator Instructions

This guide explains how to run the gym body-metrics calculator.

## Workflow

1. Call `calculate_macros` with the member's data
2. Review the result card (BMI, BMR, daily calories, macros)
3. Call `generate_meal_plan` with no arguments to split the last result into meals
4. Optionally call `export_calculation_markdown` for a printable summary

---

## Required Fields

| Field | Meaning | Accepted values |
|-------|---------|-----------------|
| `weight` | Body weight | positive number (kg, or lb with `weight_unit: "lb"`) |
| `height` | Height | positive number (cm, or in with `height_unit: "in"`) |
| `age` | Age in years | positive whole number |
| `sex` | Sex | `male`, `female` |
| `activity` | Activity factor | positive number, or a preset name |
| `goal` | Goal | `lose`, `maintain`, `gain` |

Numbers may be passed as JSON numbers or numeric strings.

### Activity Presets

Call `list_activity_levels` for the full table.

| Preset | Factor |
|--------|--------|
| sedentary | 1.2 |
| light | 1.375 |
| moderate | 1.55 |
| active | 1.725 |
| very_active | 1.9 |

---

## How Targets Are Set

- **BMI** = weight / height(m)^2
- **BMR** (Mifflin-St Jeor): 10 x weight + 6.25 x height - 5 x age, +5 for men, -161 for women
- **TDEE** = BMR x activity factor
- **Daily calories**: lose = TDEE - 20%, gain = TDEE + 20%, maintain = TDEE

| Goal | Protein | Fat | Carbs |
|------|---------|-----|-------|
| lose | 2.0 g/kg | 30% of calories | remainder |
| gain | 1.8 g/kg | 25% of calories | remainder |
| maintain | 1.1 g/kg | 30% of calories | remainder |

**Negative carbs:** at very low calorie targets protein and fat can exceed the
target and carbs come out negative. This is reported as-is unless the server
runs with `FITCALC_CARB_POLICY=clamp`. Point it out to the user rather than
hiding it.

---

## Meal Plans

| Goal | Meals |
|------|-------|
| gain | Breakfast 20%, Mid-morning Snack 15%, Lunch 25%, Afternoon Snack 15%, Dinner 20%, Evening Snack 5% |
| lose | Breakfast 25%, Lunch 35%, Afternoon Snack 20%, Dinner 20% |
| maintain | Breakfast 20%, Mid-morning Snack 15%, Lunch 30%, Afternoon Snack 15%, Dinner 20% |

Each slot's values are rounded on their own, so slot sums can be off from the
daily totals by a few units. `rounding_drift` in the response shows the
difference. With `FITCALC_MEAL_ROUNDING=reconcile` the sums match exactly.

`generate_meal_plan` can also be called with explicit `daily_calories`,
`protein`, `carbs`, `fats` and `goal` to plan arbitrary targets.

---

## Errors

Invalid or missing fields return an error naming the field. Values outside
human ranges (weight over 650 kg, height over 280 cm, age over 130, activity
factor over 3.0) are rejected the same way. Nothing is
calculated and the previous result is discarded; fix the field and call
`calculate_macros` again.
"#;

/// Status response
#[derive(Debug, Clone, Serialize)]
pub struct FitcalcStatus {
    #[serde(flatten)]
    pub build: BuildInfo,

    /// Active configuration
    pub config: Config,
    pub session_state: &'static str,
    pub recent_states: Vec<&'static str>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    config: Config,
}

impl StatusTracker {
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            config,
        }
    }

    pub fn get_status(&self, session: &CalculatorSession) -> FitcalcStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitcalcStatus {
            build: BuildInfo::current(),
            config: self.config,
            session_state: session.state().name(),
            recent_states: session.recent_states(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config_and_state() {
        let tracker = StatusTracker::new(Config::default());
        let status = tracker.get_status(&CalculatorSession::new());
        assert_eq!(status.session_state, "idle");
        assert_eq!(status.recent_states, vec!["idle"]);
        assert_eq!(status.process_id, std::process::id());
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["version"], crate::build_info::VERSION);
        assert_eq!(json["config"]["carb_policy"], "preserve");
        assert_eq!(json["config"]["meal_rounding"], "independent");
    }

    #[test]
    fn test_instructions_cover_tools() {
        for tool in ["calculate_macros", "generate_meal_plan", "export_calculation_markdown", "list_activity_levels"] {
            assert!(CALCULATOR_INSTRUCTIONS.contains(tool), "{}", tool);
        }
    }
}

//! fitcalc MCP Server Implementation
//!
//! Exposes the calculator tools over MCP.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::calculator::CalculatorOptions;
use crate::config::Config;
use crate::models::{Goal, MealTargets, RawCalculatorInput, RawValue};
use crate::session::{CalculatorSession, SessionError};
use crate::tools::calculator;
use crate::tools::report;
use crate::tools::status::StatusTracker;

/// fitcalc MCP Service
#[derive(Clone)]
pub struct FitcalcService {
    status_tracker: Arc<tokio::sync::Mutex<StatusTracker>>,
    /// Calculator state for this client
    session: Arc<Mutex<CalculatorSession>>,
    options: CalculatorOptions,
    tool_router: ToolRouter<FitcalcService>,
}

impl FitcalcService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(tokio::sync::Mutex::new(StatusTracker::new(config))),
            session: Arc::new(Mutex::new(CalculatorSession::new())),
            options: config.calculator_options(),
            tool_router: Self::tool_router(),
        }
    }

    fn session(&self) -> Result<MutexGuard<'_, CalculatorSession>, McpError> {
        self.session
            .lock()
            .map_err(|_| McpError::internal_error("Calculator session lock poisoned", None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn session_error(e: SessionError) -> McpError {
    match e {
        SessionError::Validation(_) | SessionError::NoResult => {
            McpError::invalid_params(e.to_string(), None)
        }
        // Unreachable while each tool holds the session lock for its whole call
        SessionError::InvalidTransition { .. } => McpError::invalid_request(e.to_string(), None),
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMacrosParams {
    /// Body weight (kg by default); number or numeric string
    pub weight: Option<serde_json::Value>,
    /// Height (cm by default); number or numeric string
    pub height: Option<serde_json::Value>,
    /// Age in whole years
    pub age: Option<serde_json::Value>,
    /// male or female
    pub sex: Option<String>,
    /// Activity factor (e.g. 1.55) or preset: sedentary, light, moderate, active, very_active
    pub activity: Option<serde_json::Value>,
    /// lose, maintain or gain
    pub goal: Option<String>,
    /// kg (default) or lb
    pub weight_unit: Option<String>,
    /// cm (default) or in
    pub height_unit: Option<String>,
}

impl From<CalculateMacrosParams> for RawCalculatorInput {
    fn from(p: CalculateMacrosParams) -> Self {
        RawCalculatorInput {
            weight: p.weight.and_then(RawValue::from_json),
            height: p.height.and_then(RawValue::from_json),
            age: p.age.and_then(RawValue::from_json),
            sex: p.sex,
            activity: p.activity.and_then(RawValue::from_json),
            goal: p.goal,
            weight_unit: p.weight_unit,
            height_unit: p.height_unit,
        }
    }
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GenerateMealPlanParams {
    /// Daily calorie target; omit all fields to use the last calculation
    pub daily_calories: Option<f64>,
    /// Daily protein grams
    pub protein: Option<i64>,
    /// Daily carbohydrate grams
    pub carbs: Option<i64>,
    /// Daily fat grams
    pub fats: Option<i64>,
    /// lose, maintain or gain
    pub goal: Option<String>,
}

impl GenerateMealPlanParams {
    /// `None` when every field is omitted; an error when only some are given.
    /// Ranges are checked by the meal-plan tool.
    fn targets(&self) -> Result<Option<MealTargets>, McpError> {
        match (self.daily_calories, self.protein, self.carbs, self.fats, self.goal.as_deref()) {
            (None, None, None, None, None) => Ok(None),
            (Some(daily_calories), Some(protein), Some(carbs), Some(fats), Some(goal)) => {
                let goal = Goal::from_str(goal).ok_or_else(|| {
                    McpError::invalid_params(
                        format!("Unknown goal '{}'. Valid values: lose, maintain, gain", goal),
                        None,
                    )
                })?;
                Ok(Some(MealTargets {
                    daily_calories,
                    protein,
                    carbs,
                    fats,
                    goal,
                }))
            }
            _ => Err(McpError::invalid_params(
                "Provide all of daily_calories, protein, carbs, fats and goal, or none of them",
                None,
            )),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExportCalculationParams {
    /// Include the meal plan table (default true)
    #[serde(default = "default_true")]
    pub include_meal_plan: bool,
}

fn default_true() -> bool { true }

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitcalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the fitcalc service including build info, configuration, calculator state, and process information")]
    async fn fitcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(&*self.session()?);
        json_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for the body-metrics calculator. Call this before the first calculation or when unsure how to use the calculator tools.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Calculate BMI, BMR, daily calorie target, macronutrients, ideal weight and muscular potential from weight, height, age, sex, activity factor and goal")]
    fn calculate_macros(&self, Parameters(p): Parameters<CalculateMacrosParams>) -> Result<CallToolResult, McpError> {
        let raw = RawCalculatorInput::from(p);
        let mut session = self.session()?;
        let result = calculator::calculate_macros(&mut session, &raw, &self.options).map_err(session_error)?;
        json_result(&result)
    }

    #[tool(description = "Split daily targets into a per-meal plan (6 meals for gain, 4 for lose, 5 for maintain). With no arguments, uses the last calculation.")]
    fn generate_meal_plan(&self, Parameters(p): Parameters<GenerateMealPlanParams>) -> Result<CallToolResult, McpError> {
        let targets = p.targets()?;
        let session = self.session()?;
        let result = calculator::generate_meal_plan(&session, targets, &self.options).map_err(session_error)?;
        json_result(&result)
    }

    #[tool(description = "Export the last calculation (and optionally its meal plan) as a Markdown document")]
    fn export_calculation_markdown(&self, Parameters(p): Parameters<ExportCalculationParams>) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = report::export_calculation_markdown(&session, p.include_meal_plan, &self.options)
            .map_err(session_error)?;
        json_result(&result)
    }

    #[tool(description = "List the named activity-factor presets accepted by calculate_macros")]
    fn list_activity_levels(&self) -> Result<CallToolResult, McpError> {
        json_result(&calculator::list_activity_levels())
    }

    #[tool(description = "Clear the last calculation and return the calculator to idle")]
    fn reset_calculator(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        json_result(&calculator::reset_calculator(&mut session))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitcalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Gym Body-Metrics Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "fitcalc - BMI, energy expenditure, macronutrient and meal-plan calculator. \
                 IMPORTANT: Call calculator_instructions before the first calculation. \
                 Calculator: calculate_macros, generate_meal_plan, export_calculation_markdown, reset_calculator. \
                 Reference: list_activity_levels. Service: fitcalc_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_convert_to_raw_input() {
        let p: CalculateMacrosParams = serde_json::from_value(serde_json::json!({
            "weight": 70, "height": "175", "age": 30, "sex": "male",
            "activity": "moderate", "goal": "maintain", "weight_unit": null
        }))
        .unwrap();
        let raw = RawCalculatorInput::from(p);
        assert_eq!(raw.weight, Some(RawValue::Number(70.0)));
        assert_eq!(raw.height, Some(RawValue::Text("175".into())));
        assert_eq!(raw.activity, Some(RawValue::Text("moderate".into())));
        assert_eq!(raw.weight_unit, None);
    }

    #[test]
    fn test_meal_plan_params_all_or_nothing() {
        assert!(GenerateMealPlanParams::default().targets().unwrap().is_none());

        let partial = GenerateMealPlanParams {
            daily_calories: Some(2000.0),
            ..GenerateMealPlanParams::default()
        };
        assert!(partial.targets().is_err());

        let full = GenerateMealPlanParams {
            daily_calories: Some(2000.0),
            protein: Some(150),
            carbs: Some(200),
            fats: Some(67),
            goal: Some("gain".into()),
        };
        assert_eq!(full.targets().unwrap().map(|t| t.goal), Some(Goal::Gain));

        let bad_goal = GenerateMealPlanParams {
            goal: Some("sideways".into()),
            ..full
        };
        assert!(bad_goal.targets().is_err());
    }

    #[test]
    fn test_service_retries_rejected_form() {
        let service = FitcalcService::new(Config::default());
        let bad: CalculateMacrosParams = serde_json::from_value(serde_json::json!({
            "weight": 1e18, "height": 175, "age": 30, "sex": "male", "activity": 1.55, "goal": "maintain"
        }))
        .unwrap();
        assert!(service.calculate_macros(Parameters(bad)).is_err());
        assert_eq!(service.session().unwrap().state().name(), "editing");

        let good: CalculateMacrosParams = serde_json::from_value(serde_json::json!({
            "weight": 70, "height": 175, "age": 30, "sex": "male", "activity": 1.55, "goal": "maintain"
        }))
        .unwrap();
        assert!(service.calculate_macros(Parameters(good)).is_ok());
        assert_eq!(
            service.session().unwrap().recent_states(),
            vec!["idle", "editing", "submitting", "editing", "submitting", "showing"]
        );
    }

    #[test]
    fn test_explicit_meal_targets_out_of_range() {
        let service = FitcalcService::new(Config::default());
        let p = GenerateMealPlanParams {
            daily_calories: Some(2000.0),
            protein: Some(i64::MAX),
            carbs: Some(200),
            fats: Some(60),
            goal: Some("maintain".into()),
        };
        assert!(service.generate_meal_plan(Parameters(p)).is_err());
    }

    #[test]
    fn test_service_runs_calculation_through_session() {
        let service = FitcalcService::new(Config::default());
        let p: CalculateMacrosParams = serde_json::from_value(serde_json::json!({
            "weight": 80, "height": 180, "age": 25, "sex": "female", "activity": 1.2, "goal": "lose"
        }))
        .unwrap();
        assert!(service.calculate_macros(Parameters(p)).is_ok());
        assert_eq!(
            service.session().unwrap().recent_states(),
            vec!["idle", "editing", "submitting", "showing"]
        );
        assert!(service.generate_meal_plan(Parameters(GenerateMealPlanParams::default())).is_ok());
        assert!(service.reset_calculator().is_ok());
        assert!(service.generate_meal_plan(Parameters(GenerateMealPlanParams::default())).is_err());
    }
}

//! Markdown report of a calculation
//!
//! Used by the export tool and the `macro_report` binary.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::calculator::units::round_to_i64;
use crate::calculator::CalculatorOptions;
use crate::models::{CalculatorResult, MealPlanRow};
use crate::session::{CalculatorSession, SessionError};

use super::calculator::DisplayValues;

/// Response for export_calculation_markdown
#[derive(Debug, Serialize)]
pub struct ExportCalculationResponse {
    pub markdown: String,
    pub meal_count: usize,
    pub generated_at: String,
}

/// Render a result, and optionally its meal plan, as Markdown
pub fn render_markdown(
    result: &CalculatorResult,
    meals: Option<&[MealPlanRow]>,
    generated_at: DateTime<Utc>,
) -> String {
    let display = DisplayValues::from_result(result);
    let mut md = String::new();

    md.push_str("# Body Metrics & Nutrition Plan\n\n");
    md.push_str(&format!("**Date:** {}\n\n", generated_at.format("%-d %B %Y")));
    md.push_str(&format!("**Goal:** {}\n\n", result.goal.display_name()));
    md.push_str("---\n\n");

    md.push_str("## Body Metrics\n\n");
    md.push_str(&format!(
        "- **BMI:** {} ({})\n",
        display.bmi, result.energy.bmi_category
    ));
    md.push_str(&format!("- **BMR:** {} kcal/day\n", display.bmr));
    md.push_str(&format!("- **Ideal weight:** {} kg\n", display.ideal_weight));
    md.push_str(&format!(
        "- **Max muscular potential:** {} kg\n\n",
        display.muscle_potential
    ));

    md.push_str("## Daily Targets\n\n");
    md.push_str(&format!(
        "- **Calories:** {} kcal ({})\n",
        display.daily_calories, result.energy.adjustment_description
    ));
    md.push_str(&format!("- **Protein:** {} g\n", result.macros.protein));
    md.push_str(&format!("- **Carbohydrates:** {} g\n", result.macros.carbs));
    md.push_str(&format!("- **Fats:** {} g\n", result.macros.fats));
    md.push_str(&format!(
        "- **Recommended protein range:** {} g/day\n",
        display.protein_range
    ));

    if let Some(rows) = meals {
        md.push_str("\n## Meal Plan\n\n");
        md.push_str("| Meal | Calories | Protein | Carbs | Fats |\n");
        md.push_str("|------|----------|---------|-------|------|\n");
        for row in rows {
            md.push_str(&format!(
                "| {} | {} cal | {}g | {}g | {}g |\n",
                row.name, row.calories, row.protein, row.carbs, row.fats
            ));
        }
    }

    md.push_str("\n---\n\n");
    md.push_str(&format!(
        "*Generated: {}*\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md
}

/// Export the session's last result
pub fn export_calculation_markdown(
    session: &CalculatorSession,
    include_meal_plan: bool,
    options: &CalculatorOptions,
) -> Result<ExportCalculationResponse, SessionError> {
    let result = session.last_result().ok_or(SessionError::NoResult)?;
    let meals = if include_meal_plan {
        Some(session.meal_plan(options)?)
    } else {
        None
    };

    let now = Utc::now();
    let markdown = render_markdown(result, meals.as_deref(), now);

    tracing::info!(
        daily_calories = round_to_i64(result.energy.daily_calories),
        "Calculation exported"
    );

    Ok(ExportCalculationResponse {
        markdown,
        meal_count: meals.map(|m| m.len()).unwrap_or(0),
        generated_at: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{calculate, meal_plan_for, validate_typed};
    use crate::models::{Goal, Sex};
    use chrono::TimeZone;

    fn sample() -> CalculatorResult {
        let input = validate_typed(70.0, 175.0, 30, Sex::Male, 1.55, Goal::Maintain).unwrap();
        calculate(&input, &CalculatorOptions::default())
    }

    #[test]
    fn test_render_without_meal_plan() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 9, 30, 0).unwrap();
        let md = render_markdown(&sample(), None, at);
        assert!(md.starts_with("# Body Metrics & Nutrition Plan"));
        assert!(md.contains("**Date:** 7 March 2026"));
        assert!(md.contains("- **BMI:** 22.9 (Normal weight)"));
        assert!(md.contains("- **Calories:** 2556 kcal (Maintenance)"));
        assert!(md.contains("- **Protein:** 77 g"));
        assert!(!md.contains("## Meal Plan"));
        assert!(md.contains("*Generated: 2026-03-07 09:30:00 UTC*"));
    }

    #[test]
    fn test_render_with_meal_plan() {
        let result = sample();
        let rows = meal_plan_for(&result, &CalculatorOptions::default());
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 9, 30, 0).unwrap();
        let md = render_markdown(&result, Some(&rows), at);
        assert!(md.contains("## Meal Plan"));
        assert!(md.contains("| Breakfast | 511 cal | 15g | 74g | 17g |"));
        assert!(md.contains("| Lunch | 767 cal | 23g | 111g | 26g |"));
    }

    #[test]
    fn test_export_requires_result() {
        let err = export_calculation_markdown(&CalculatorSession::new(), true, &CalculatorOptions::default())
            .unwrap_err();
        assert_eq!(err, SessionError::NoResult);
    }
}

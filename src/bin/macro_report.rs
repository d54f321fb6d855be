//! Print a Markdown calculation report for one member

use fitcalc::calculator::{calculate_raw, meal_plan_for};
use fitcalc::config::Config;
use fitcalc::models::{RawCalculatorInput, RawValue};
use fitcalc::tools::report::render_markdown;

const USAGE: &str = "Usage: macro_report <weight_kg> <height_cm> <age> <male|female> <activity> <lose|maintain|gain>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 6 {
        eprintln!("{}", USAGE);
        return Err(format!("expected 6 arguments, got {}", args.len()).into());
    }

    let raw = RawCalculatorInput {
        weight: Some(RawValue::Text(args[0].clone())),
        height: Some(RawValue::Text(args[1].clone())),
        age: Some(RawValue::Text(args[2].clone())),
        sex: Some(args[3].clone()),
        activity: Some(RawValue::Text(args[4].clone())),
        goal: Some(args[5].clone()),
        ..RawCalculatorInput::default()
    };

    let options = Config::from_env()?.calculator_options();
    let result = calculate_raw(&raw, &options)?;
    let meals = meal_plan_for(&result, &options);

    print!("{}", render_markdown(&result, Some(&meals), chrono::Utc::now()));
    Ok(())
}

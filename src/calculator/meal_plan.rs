//! Meal plan distribution
//!
//! Fixed per-goal meal layouts, and the per-slot gram and calorie values
//! generated from a set of daily targets.

use serde::{Deserialize, Serialize};

use super::units::{round_half_up, round_to_i64};
use crate::models::{Goal, MealAllocation, MealPlan, MealPlanRow, MealTargets};

// ============================================================================
// Distribution Tables
// ============================================================================

/// Six meals for muscle gain
pub const GAIN_MEALS: [MealAllocation; 6] = [
    MealAllocation::uniform("Breakfast", 0.20),
    MealAllocation::uniform("Mid-morning Snack", 0.15),
    MealAllocation::uniform("Lunch", 0.25),
    MealAllocation::uniform("Afternoon Snack", 0.15),
    MealAllocation::uniform("Dinner", 0.20),
    MealAllocation::uniform("Evening Snack", 0.05),
];

/// Four meals for weight loss
pub const LOSE_MEALS: [MealAllocation; 4] = [
    MealAllocation::uniform("Breakfast", 0.25),
    MealAllocation::uniform("Lunch", 0.35),
    MealAllocation::uniform("Afternoon Snack", 0.20),
    MealAllocation::uniform("Dinner", 0.20),
];

/// Five meals for maintenance
pub const MAINTAIN_MEALS: [MealAllocation; 5] = [
    MealAllocation::uniform("Breakfast", 0.20),
    MealAllocation::uniform("Mid-morning Snack", 0.15),
    MealAllocation::uniform("Lunch", 0.30),
    MealAllocation::uniform("Afternoon Snack", 0.15),
    MealAllocation::uniform("Dinner", 0.20),
];

/// How per-slot values are rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealRounding {
    /// Round every slot on its own; slot sums may drift from the daily total
    #[default]
    Independent,
    /// Largest-remainder distribution; slot sums equal the daily total
    Reconcile,
}

impl MealRounding {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealRounding::Independent => "independent",
            MealRounding::Reconcile => "reconcile",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "independent" => Some(MealRounding::Independent),
            "reconcile" | "reconciled" => Some(MealRounding::Reconcile),
            _ => None,
        }
    }
}

/// Meal layout for a goal
pub fn meal_distribution(goal: Goal) -> MealPlan {
    let allocations: &'static [MealAllocation] = match goal {
        Goal::Gain => &GAIN_MEALS,
        Goal::Lose => &LOSE_MEALS,
        Goal::Maintain => &MAINTAIN_MEALS,
    };
    MealPlan { goal, allocations }
}

/// Spread daily targets over the goal's meal slots
///
/// Daily calories are rounded to whole calories before being split, the same
/// figure the result view shows.
pub fn generate_meal_plan(targets: &MealTargets, rounding: MealRounding) -> Vec<MealPlanRow> {
    let plan = meal_distribution(targets.goal);
    let daily_calories = round_to_i64(targets.daily_calories);

    let calories = split(&plan, daily_calories, rounding, |a| a.calories);
    let protein = split(&plan, targets.protein, rounding, |a| a.protein);
    let carbs = split(&plan, targets.carbs, rounding, |a| a.carbs);
    let fats = split(&plan, targets.fats, rounding, |a| a.fats);

    plan.allocations
        .iter()
        .enumerate()
        .map(|(i, a)| MealPlanRow {
            name: a.name.to_string(),
            calories: calories[i],
            protein: protein[i],
            carbs: carbs[i],
            fats: fats[i],
        })
        .collect()
}

/// One nutrient column of the plan
fn split(
    plan: &MealPlan,
    total: i64,
    rounding: MealRounding,
    share: fn(&MealAllocation) -> f64,
) -> Vec<i64> {
    match rounding {
        MealRounding::Independent => plan
            .allocations
            .iter()
            .map(|a| round_to_i64(total as f64 * share(a)))
            .collect(),
        MealRounding::Reconcile => {
            let percents: Vec<i64> = plan
                .allocations
                .iter()
                .map(|a| round_half_up(share(a) * 100.0) as i64)
                .collect();
            distribute_largest_remainder(total, &percents)
        }
    }
}

/// Split `total` by integer percentages so the parts sum to `total`
///
/// Each part starts at its floor; the leftover units go to the parts with the
/// largest remainders, earlier slots first on ties.
fn distribute_largest_remainder(total: i64, percents: &[i64]) -> Vec<i64> {
    let percent_sum: i128 = percents.iter().map(|&p| p as i128).sum();
    if percent_sum == 0 {
        return vec![0; percents.len()];
    }

    // Widened so `total * percent` cannot overflow
    let total = total as i128;
    let mut parts: Vec<i128> = Vec::with_capacity(percents.len());
    let mut remainders: Vec<i128> = Vec::with_capacity(percents.len());
    for &p in percents {
        let scaled = total * p as i128;
        parts.push(scaled.div_euclid(percent_sum));
        remainders.push(scaled.rem_euclid(percent_sum));
    }

    let leftover = (total - parts.iter().sum::<i128>()).max(0) as usize;
    let mut order: Vec<usize> = (0..percents.len()).collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]));

    for &i in order.iter().take(leftover) {
        parts[i] += 1;
    }
    // No part exceeds `total` in magnitude, so each fits back into i64
    parts.into_iter().map(|p| p as i64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroSplit;

    fn fractions(goal: Goal) -> Vec<f64> {
        meal_distribution(goal).allocations.iter().map(|a| a.calories).collect()
    }

    fn column(rows: &[MealPlanRow], f: fn(&MealPlanRow) -> i64) -> Vec<i64> {
        rows.iter().map(f).collect()
    }

    fn maintain_targets() -> MealTargets {
        MealTargets::new(
            2555.5625,
            MacroSplit { protein: 77, carbs: 370, fats: 85 },
            Goal::Maintain,
        )
    }

    #[test]
    fn test_slot_counts() {
        assert_eq!(meal_distribution(Goal::Gain).allocations.len(), 6);
        assert_eq!(meal_distribution(Goal::Lose).allocations.len(), 4);
        assert_eq!(meal_distribution(Goal::Maintain).allocations.len(), 5);
    }

    #[test]
    fn test_gain_fractions_in_order() {
        assert_eq!(fractions(Goal::Gain), vec![0.20, 0.15, 0.25, 0.15, 0.20, 0.05]);
        assert_eq!(
            meal_distribution(Goal::Gain).allocations.iter().map(|a| a.name).collect::<Vec<_>>(),
            vec![
                "Breakfast",
                "Mid-morning Snack",
                "Lunch",
                "Afternoon Snack",
                "Dinner",
                "Evening Snack"
            ]
        );
    }

    #[test]
    fn test_fractions_sum_to_one() {
        for goal in [Goal::Gain, Goal::Lose, Goal::Maintain] {
            let sum: f64 = fractions(goal).iter().sum();
            assert_eq!(sum, 1.0, "{:?}", goal);
        }
    }

    #[test]
    fn test_every_nutrient_shares_the_slot_fraction() {
        for goal in [Goal::Gain, Goal::Lose, Goal::Maintain] {
            for a in meal_distribution(goal).allocations {
                assert_eq!(a.calories, a.protein);
                assert_eq!(a.calories, a.carbs);
                assert_eq!(a.calories, a.fats);
            }
        }
    }

    #[test]
    fn test_independent_rounding_keeps_drift() {
        let rows = generate_meal_plan(&maintain_targets(), MealRounding::Independent);
        assert_eq!(column(&rows, |r| r.calories), vec![511, 383, 767, 383, 511]);
        assert_eq!(column(&rows, |r| r.protein), vec![15, 12, 23, 12, 15]);
        assert_eq!(column(&rows, |r| r.carbs), vec![74, 56, 111, 56, 74]);
        assert_eq!(column(&rows, |r| r.fats), vec![17, 13, 26, 13, 17]);
        // 2556 kcal target, 2555 distributed; 85 g fat target, 86 distributed
        assert_eq!(rows.iter().map(|r| r.calories).sum::<i64>(), 2555);
        assert_eq!(rows.iter().map(|r| r.fats).sum::<i64>(), 86);
    }

    #[test]
    fn test_reconciled_rounding_matches_totals() {
        let rows = generate_meal_plan(&maintain_targets(), MealRounding::Reconcile);
        assert_eq!(column(&rows, |r| r.calories), vec![511, 384, 767, 383, 511]);
        assert_eq!(column(&rows, |r| r.carbs), vec![74, 56, 111, 55, 74]);
        assert_eq!(column(&rows, |r| r.fats), vec![17, 13, 25, 13, 17]);
        assert_eq!(rows.iter().map(|r| r.calories).sum::<i64>(), 2556);
        assert_eq!(rows.iter().map(|r| r.protein).sum::<i64>(), 77);
        assert_eq!(rows.iter().map(|r| r.carbs).sum::<i64>(), 370);
        assert_eq!(rows.iter().map(|r| r.fats).sum::<i64>(), 85);
    }

    #[test]
    fn test_reconcile_handles_negative_totals() {
        assert_eq!(distribute_largest_remainder(-160, &[25, 35, 20, 20]), vec![-40, -56, -32, -32]);
        let parts = distribute_largest_remainder(-7, &[25, 35, 20, 20]);
        assert_eq!(parts.iter().sum::<i64>(), -7);
    }

    #[test]
    fn test_reconcile_extreme_totals_do_not_overflow() {
        for total in [i64::MAX, i64::MIN] {
            let parts = distribute_largest_remainder(total, &[20, 15, 30, 15, 20]);
            assert_eq!(parts.iter().map(|&p| p as i128).sum::<i128>(), total as i128);
        }

        let targets = MealTargets::new(
            2000.0,
            MacroSplit { protein: i64::MAX, carbs: i64::MIN, fats: i64::MAX },
            Goal::Gain,
        );
        let rows = generate_meal_plan(&targets, MealRounding::Reconcile);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows.iter().map(|r| r.protein as i128).sum::<i128>(), i64::MAX as i128);
    }

    #[test]
    fn test_lose_plan_rows() {
        let targets = MealTargets::new(
            1573.44,
            MacroSplit { protein: 160, carbs: 115, fats: 52 },
            Goal::Lose,
        );
        let rows = generate_meal_plan(&targets, MealRounding::Independent);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].name, "Lunch");
        assert_eq!(column(&rows, |r| r.calories), vec![393, 551, 315, 315]);
        assert_eq!(column(&rows, |r| r.protein), vec![40, 56, 32, 32]);
        assert_eq!(column(&rows, |r| r.carbs), vec![29, 40, 23, 23]);
        assert_eq!(column(&rows, |r| r.fats), vec![13, 18, 10, 10]);
    }

    #[test]
    fn test_meal_rounding_from_str() {
        assert_eq!(MealRounding::from_str("Reconcile"), Some(MealRounding::Reconcile));
        assert_eq!(MealRounding::from_str("independent"), Some(MealRounding::Independent));
        assert_eq!(MealRounding::from_str("exact"), None);
    }
}

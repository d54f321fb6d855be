//! Informational body targets
//!
//! Shown alongside the calorie and macro targets; never fed back into them.

use super::units::cm_to_inches;
use crate::models::{MusclePotential, Sex};

/// Height the Robinson formula is anchored at (5 ft)
const ROBINSON_REFERENCE_IN: f64 = 60.0;

/// Ideal bodyweight in kg, J.D. Robinson (1983)
pub fn ideal_weight(height_cm: f64, sex: Sex) -> f64 {
    let inches_over = cm_to_inches(height_cm) - ROBINSON_REFERENCE_IN;
    match sex {
        Sex::Male => 52.0 + 1.9 * inches_over,
        Sex::Female => 49.0 + 1.7 * inches_over,
    }
}

/// Natural muscular-potential bodyweight at single-digit body fat, Martin Berkhan
pub fn muscle_potential(height_cm: f64) -> MusclePotential {
    MusclePotential {
        lower: height_cm - 102.0,
        upper: height_cm - 98.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_weight_at_five_feet() {
        assert!((ideal_weight(152.4, Sex::Male) - 52.0).abs() < 1e-9);
        assert!((ideal_weight(152.4, Sex::Female) - 49.0).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_weight_175cm() {
        // 175 cm = 68.898 in
        assert!((ideal_weight(175.0, Sex::Male) - 68.906).abs() < 0.001);
        assert!((ideal_weight(175.0, Sex::Female) - 64.126).abs() < 0.001);
    }

    #[test]
    fn test_muscle_potential() {
        let range = muscle_potential(180.0);
        assert_eq!(range.lower, 78.0);
        assert_eq!(range.upper, 82.0);
    }
}

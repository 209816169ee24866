use crate::error::{DietError, Result};
use crate::models::WeightLossPlan;

/// Rounded daily calorie target for one plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTarget {
    pub plan: WeightLossPlan,
    pub calories: u32,
}

/// Calorie targets for all four plans, in fixed order, rounded to the
/// nearest integer for display.
pub fn calorie_targets(maintenance_calories: f64) -> Result<Vec<PlanTarget>> {
    if !maintenance_calories.is_finite() || maintenance_calories < 0.0 {
        return Err(DietError::InvalidInput(format!(
            "Maintenance calories must be a non-negative number, got {}",
            maintenance_calories
        )));
    }

    Ok(WeightLossPlan::ALL
        .into_iter()
        .map(|plan| PlanTarget {
            plan,
            calories: (maintenance_calories * plan.multiplier()).round() as u32,
        })
        .collect())
}

/// Unrounded daily calorie budget for the chosen plan.
pub fn daily_calories(maintenance_calories: f64, plan: WeightLossPlan) -> Result<f64> {
    if !maintenance_calories.is_finite() || maintenance_calories < 0.0 {
        return Err(DietError::InvalidInput(format!(
            "Maintenance calories must be a non-negative number, got {}",
            maintenance_calories
        )));
    }

    Ok(maintenance_calories * plan.multiplier())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_for_2000() {
        let targets = calorie_targets(2000.0).unwrap();
        let calories: Vec<u32> = targets.iter().map(|t| t.calories).collect();
        assert_eq!(calories, vec![2000, 1800, 1600, 1200]);
    }

    #[test]
    fn test_targets_rounded() {
        // 1648.75 * 0.9 = 1483.875 -> 1484
        let targets = calorie_targets(1648.75).unwrap();
        assert_eq!(targets[1].plan, WeightLossPlan::MildLoss);
        assert_eq!(targets[1].calories, 1484);
    }

    #[test]
    fn test_targets_order_fixed() {
        let targets = calorie_targets(1500.0).unwrap();
        let plans: Vec<WeightLossPlan> = targets.iter().map(|t| t.plan).collect();
        assert_eq!(plans, WeightLossPlan::ALL.to_vec());
    }

    #[test]
    fn test_nonfinite_rejected() {
        assert!(calorie_targets(f64::NAN).is_err());
        assert!(calorie_targets(f64::INFINITY).is_err());
        assert!(daily_calories(f64::NAN, WeightLossPlan::Maintain).is_err());
    }

    #[test]
    fn test_daily_calories() {
        let daily = daily_calories(2000.0, WeightLossPlan::Loss).unwrap();
        assert!((daily - 1600.0).abs() < 1e-9);
    }
}

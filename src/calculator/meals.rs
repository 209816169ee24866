use rand::Rng;

use crate::calculator::constants::{meal_split, ranges_for};
use crate::error::{DietError, Result};
use crate::models::{MealShare, MealSlot, NutritionVector};

/// Split a daily calorie budget across meal slots.
///
/// Meal count must be 3, 4 or 5. Shares are returned in slot order and
/// sum to the given total.
pub fn allocate(total_daily_calories: f64, meal_count: u8) -> Result<Vec<MealShare>> {
    if !total_daily_calories.is_finite() || total_daily_calories < 0.0 {
        return Err(DietError::InvalidInput(format!(
            "Daily calories must be a non-negative number, got {}",
            total_daily_calories
        )));
    }

    let split = meal_split(meal_count).ok_or_else(|| {
        DietError::InvalidInput(format!(
            "Meal count must be 3, 4 or 5, got {}",
            meal_count
        ))
    })?;

    Ok(split
        .iter()
        .map(|&(slot, fraction)| MealShare {
            slot,
            calories: fraction * total_daily_calories,
        })
        .collect())
}

/// Placeholder nutrition target for one meal, sent to the recommendation
/// service.
///
/// Calories come from the meal's share; the remaining fields are sampled
/// uniformly from per-slot-kind ranges. The RNG is injected so callers can
/// seed it for reproducible output.
pub fn nutrition_target<R: Rng + ?Sized>(
    slot: MealSlot,
    meal_calories: f64,
    rng: &mut R,
) -> NutritionVector {
    let ranges = ranges_for(slot);

    NutritionVector {
        calories: meal_calories,
        fat: rng.gen_range(ranges.fat.0..=ranges.fat.1),
        saturated_fat: rng.gen_range(ranges.saturated_fat.0..=ranges.saturated_fat.1),
        cholesterol: rng.gen_range(ranges.cholesterol.0..=ranges.cholesterol.1),
        sodium: rng.gen_range(ranges.sodium.0..=ranges.sodium.1),
        carbs: rng.gen_range(ranges.carbs.0..=ranges.carbs.1),
        fiber: rng.gen_range(ranges.fiber.0..=ranges.fiber.1),
        sugar: rng.gen_range(ranges.sugar.0..=ranges.sugar.1),
        protein: rng.gen_range(ranges.protein.0..=ranges.protein.1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_allocate_three_meals() {
        let shares = allocate(2000.0, 3).unwrap();
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].slot, MealSlot::Breakfast);
        assert!((shares[0].calories - 700.0).abs() < 1e-9);
        assert_eq!(shares[1].slot, MealSlot::Lunch);
        assert!((shares[1].calories - 800.0).abs() < 1e-9);
        assert_eq!(shares[2].slot, MealSlot::Dinner);
        assert!((shares[2].calories - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocate_sums_to_total() {
        for count in 3..=5u8 {
            let shares = allocate(1850.0, count).unwrap();
            let total: f64 = shares.iter().map(|s| s.calories).sum();
            assert!(
                (total - 1850.0).abs() < 1e-9,
                "{} meals sum to {}",
                count,
                total
            );
        }
    }

    #[test]
    fn test_allocate_five_meal_order() {
        let shares = allocate(2000.0, 5).unwrap();
        let slots: Vec<MealSlot> = shares.iter().map(|s| s.slot).collect();
        assert_eq!(
            slots,
            vec![
                MealSlot::Breakfast,
                MealSlot::MorningSnack,
                MealSlot::Lunch,
                MealSlot::AfternoonSnack,
                MealSlot::Dinner,
            ]
        );
        // 5-meal dinner drops to 20%
        assert!((shares[4].calories - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocate_invalid_count() {
        assert!(allocate(2000.0, 2).is_err());
        assert!(allocate(2000.0, 6).is_err());
    }

    #[test]
    fn test_allocate_invalid_total() {
        assert!(allocate(f64::NAN, 3).is_err());
        assert!(allocate(-100.0, 3).is_err());
    }

    #[test]
    fn test_target_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let target = nutrition_target(MealSlot::Breakfast, 600.0, &mut rng);
            assert_eq!(target.calories, 600.0);
            assert!((10.0..=30.0).contains(&target.fat));
            assert!((0.0..=4.0).contains(&target.saturated_fat));
            assert!((0.0..=30.0).contains(&target.cholesterol));
            assert!((0.0..=400.0).contains(&target.sodium));
            assert!((40.0..=75.0).contains(&target.carbs));
            assert!((4.0..=10.0).contains(&target.fiber));
            assert!((0.0..=10.0).contains(&target.sugar));
            assert!((30.0..=100.0).contains(&target.protein));

            let target = nutrition_target(MealSlot::Dinner, 500.0, &mut rng);
            assert!((20.0..=40.0).contains(&target.fat));
            assert!((4.0..=20.0).contains(&target.fiber));
            assert!((50.0..=175.0).contains(&target.protein));
        }
    }

    #[test]
    fn test_target_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let ta = nutrition_target(MealSlot::Lunch, 800.0, &mut a);
        let tb = nutrition_target(MealSlot::Lunch, 800.0, &mut b);
        assert_eq!(ta, tb);
    }
}

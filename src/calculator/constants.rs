use crate::models::MealSlot;

/// BMI band boundaries. Lower bounds are inclusive.
pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;
pub const BMI_NORMAL_MAX: f64 = 25.0;
pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;

/// Calorie split for a 3-meal day.
pub const MEAL_SPLIT_3: [(MealSlot, f64); 3] = [
    (MealSlot::Breakfast, 0.35),
    (MealSlot::Lunch, 0.40),
    (MealSlot::Dinner, 0.25),
];

/// Calorie split for a 4-meal day.
pub const MEAL_SPLIT_4: [(MealSlot, f64); 4] = [
    (MealSlot::Breakfast, 0.30),
    (MealSlot::MorningSnack, 0.05),
    (MealSlot::Lunch, 0.40),
    (MealSlot::Dinner, 0.25),
];

/// Calorie split for a 5-meal day.
pub const MEAL_SPLIT_5: [(MealSlot, f64); 5] = [
    (MealSlot::Breakfast, 0.30),
    (MealSlot::MorningSnack, 0.05),
    (MealSlot::Lunch, 0.40),
    (MealSlot::AfternoonSnack, 0.05),
    (MealSlot::Dinner, 0.20),
];

/// Percentage table for a meal count, or None outside 3..=5.
pub fn meal_split(meal_count: u8) -> Option<&'static [(MealSlot, f64)]> {
    match meal_count {
        3 => Some(&MEAL_SPLIT_3),
        4 => Some(&MEAL_SPLIT_4),
        5 => Some(&MEAL_SPLIT_5),
        _ => None,
    }
}

/// Sampling ranges for the placeholder nutrition target sent to the
/// recommendation service. Calories are not sampled; they come from the
/// meal's calorie share.
///
/// These are stand-in heuristics, kept as data so a principled nutrition
/// model can replace them without touching the allocator.
#[derive(Debug, Clone, Copy)]
pub struct NutrientRanges {
    pub fat: (f64, f64),
    pub saturated_fat: (f64, f64),
    pub cholesterol: (f64, f64),
    pub sodium: (f64, f64),
    pub carbs: (f64, f64),
    pub fiber: (f64, f64),
    pub sugar: (f64, f64),
    pub protein: (f64, f64),
}

/// Ranges for breakfast and snacks.
pub const LIGHT_MEAL_RANGES: NutrientRanges = NutrientRanges {
    fat: (10.0, 30.0),
    saturated_fat: (0.0, 4.0),
    cholesterol: (0.0, 30.0),
    sodium: (0.0, 400.0),
    carbs: (40.0, 75.0),
    fiber: (4.0, 10.0),
    sugar: (0.0, 10.0),
    protein: (30.0, 100.0),
};

/// Ranges for lunch and dinner.
pub const MAIN_MEAL_RANGES: NutrientRanges = NutrientRanges {
    fat: (20.0, 40.0),
    saturated_fat: (0.0, 4.0),
    cholesterol: (0.0, 30.0),
    sodium: (0.0, 400.0),
    carbs: (40.0, 75.0),
    fiber: (4.0, 20.0),
    sugar: (0.0, 10.0),
    protein: (50.0, 175.0),
};

/// Target sampling ranges for a meal slot.
pub fn ranges_for(slot: MealSlot) -> &'static NutrientRanges {
    if slot.is_main_meal() {
        &MAIN_MEAL_RANGES
    } else {
        &LIGHT_MEAL_RANGES
    }
}

use serde::{Deserialize, Serialize};

/// A named meal slot in a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
}

impl MealSlot {
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MorningSnack => "morning snack",
            MealSlot::Lunch => "lunch",
            MealSlot::AfternoonSnack => "afternoon snack",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Snacks and breakfast share one nutrition-target range table;
    /// lunch and dinner share the other.
    pub fn is_main_meal(&self) -> bool {
        matches!(self, MealSlot::Lunch | MealSlot::Dinner)
    }
}

/// One meal slot's share of the daily calorie budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealShare {
    pub slot: MealSlot,
    pub calories: f64,
}

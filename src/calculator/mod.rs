pub mod aggregate;
pub mod constants;
pub mod meals;
pub mod metrics;
pub mod plans;

pub use aggregate::aggregate_nutrition;
pub use constants::*;
pub use meals::{allocate, nutrition_target};
pub use metrics::{
    BmiCategory, SeverityColor, classify_bmi, compute_bmi, compute_bmr, maintenance_calories,
};
pub use plans::{PlanTarget, calorie_targets, daily_calories};

pub mod meal;
pub mod profile;
pub mod recipe;

pub use meal::{MealShare, MealSlot};
pub use profile::{ActivityLevel, Gender, Profile, WeightLossPlan};
pub use recipe::{NutritionVector, Recipe};

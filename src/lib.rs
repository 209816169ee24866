pub mod calculator;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod services;

pub use engine::{DietRecommendation, RecommendationEngine};
pub use error::{DietError, Result};
pub use models::{NutritionVector, Profile, Recipe};

pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_meal_choices, prompt_meal_count, prompt_plan, prompt_yes_no,
};
pub use render::{
    display_bmi, display_calorie_targets, display_meal_shares, display_nutrition_summary,
    display_recommendation,
};

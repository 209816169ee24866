use dialoguer::{Confirm, Input, Select};

use crate::engine::MealRecommendation;
use crate::error::{DietError, Result};
use crate::models::{ActivityLevel, Gender, Profile, Recipe, WeightLossPlan};

fn prompt_number(prompt: &str, default: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| DietError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    prompt_number("Age (years)", "25")
}

/// Prompt for height in centimeters.
pub fn prompt_height() -> Result<u32> {
    prompt_number("Height (cm)", "170")
}

/// Prompt for weight in kilograms.
pub fn prompt_weight() -> Result<u32> {
    prompt_number("Weight (kg)", "70")
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<Gender> {
    let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()?;

    Gender::ALL
        .get(selection)
        .copied()
        .ok_or_else(|| DietError::InvalidInput(format!("Unrecognized gender choice: {}", selection)))
}

/// Prompt for activity level from the ordered 5-level list.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("Activity")
        .items(&labels)
        .default(0)
        .interact()?;

    ActivityLevel::from_index(selection)
}

/// Prompt for the weight-loss plan.
pub fn prompt_plan() -> Result<WeightLossPlan> {
    let labels: Vec<&str> = WeightLossPlan::ALL.iter().map(|p| p.label()).collect();
    let selection = Select::new()
        .with_prompt("Choose your weight loss plan")
        .items(&labels)
        .default(0)
        .interact()?;

    WeightLossPlan::from_index(selection)
}

/// Prompt for meals per day (3-5).
pub fn prompt_meal_count() -> Result<u8> {
    let options = ["3", "4", "5"];
    let selection = Select::new()
        .with_prompt("Meals per day")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(3 + selection as u8)
}

/// Collect a validated profile from the interactive form.
pub fn collect_profile() -> Result<Profile> {
    let age = prompt_age()?;
    let height = prompt_height()?;
    let weight = prompt_weight()?;
    let gender = prompt_gender()?;
    let activity = prompt_activity()?;

    Profile::new(age, height as f64, weight as f64, gender, activity)
}

/// Ask the user to pick one recipe per meal slot for the nutrition summary.
pub fn prompt_meal_choices(meals: &[MealRecommendation]) -> Result<Vec<Recipe>> {
    let mut choices = Vec::with_capacity(meals.len());

    for meal in meals {
        if meal.recipes.is_empty() {
            continue;
        }

        let names: Vec<&str> = meal.recipes.iter().map(|r| r.name.as_str()).collect();
        let selection = Select::new()
            .with_prompt(format!("Choose your {}", meal.slot.label()))
            .items(&names)
            .default(0)
            .interact()?;

        choices.push(meal.recipes[selection].clone());
    }

    Ok(choices)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

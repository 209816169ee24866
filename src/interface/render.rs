use crate::engine::{BmiReport, DietRecommendation, MealRecommendation};
use crate::calculator::plans::PlanTarget;
use crate::models::{MealShare, NutritionVector, Recipe};

/// Display the BMI section.
pub fn display_bmi(report: &BmiReport) {
    println!();
    println!("=== BMI Calculator ===");
    println!();
    println!("Body Mass Index (BMI): {:.2} kg/m²", report.bmi);
    println!(
        "Category: {} ({})",
        report.category.label(),
        report.color.label()
    );
    println!("Healthy BMI range: 18.5 kg/m² - 25 kg/m²");
}

/// Display the calorie table for all four plans.
pub fn display_calorie_targets(targets: &[PlanTarget]) {
    println!();
    println!("=== Calories Calculator ===");
    println!();
    println!("Estimated daily calorie intake for different weight plans:");

    let max_label_len = targets
        .iter()
        .map(|t| t.plan.label().len())
        .max()
        .unwrap_or(10);

    for target in targets {
        println!(
            "  {:<width$} {:>5} Calories/day ({})",
            target.plan.label(),
            target.calories,
            target.plan.weekly_change(),
            width = max_label_len
        );
    }
}

fn display_recipe(recipe: &Recipe) {
    println!("    - {}", recipe.name);

    if let Some(url) = &recipe.image_url {
        println!("      Image: {}", url);
    }

    let values = recipe.nutrition.as_array();
    let line: Vec<String> = NutritionVector::FIELD_NAMES
        .iter()
        .zip(values)
        .map(|(name, value)| format!("{}:{:.0}", name, value))
        .collect();
    println!("      Nutrition (g): {}", line.join(" "));

    if !recipe.ingredients.is_empty() {
        println!("      Ingredients: {}", recipe.ingredients.join(", "));
    }
    if !recipe.instructions.is_empty() {
        println!("      Instructions: {}", recipe.instructions.join(" | "));
    }
    println!(
        "      Cook: {} min, Prep: {} min, Total: {} min",
        recipe.cook_time_min, recipe.prep_time_min, recipe.total_time_min
    );
}

fn display_meal(meal: &MealRecommendation) {
    println!();
    println!(
        "  {} ({:.0} cal target)",
        meal.slot.label().to_uppercase(),
        meal.target_calories
    );

    if meal.recipes.is_empty() {
        println!("    (no recipes returned)");
        return;
    }

    for recipe in &meal.recipes {
        display_recipe(recipe);
    }
}

/// Display the full recommendation: plan summary and per-slot recipes.
pub fn display_recommendation(recommendation: &DietRecommendation) {
    println!();
    println!("=== Diet Recommendations ===");
    println!(
        "Plan: {} ({:.0} Calories/day)",
        recommendation.plan.label(),
        recommendation.daily_calories
    );

    for meal in &recommendation.meals {
        display_meal(meal);
    }
    println!();
}

/// Display meal shares for an allocation run.
pub fn display_meal_shares(shares: &[MealShare]) {
    println!();
    println!("=== Meal Calorie Shares ===");
    println!();

    let max_label_len = shares
        .iter()
        .map(|s| s.slot.label().len())
        .max()
        .unwrap_or(10);

    let total: f64 = shares.iter().map(|s| s.calories).sum();
    for share in shares {
        println!(
            "  {:<width$} {:>7.1} cal",
            share.slot.label(),
            share.calories,
            width = max_label_len
        );
    }
    println!("  {:<width$} {:>7.1} cal", "total", total, width = max_label_len);
    println!();
}

/// Display the aggregated nutrition of the chosen meal composition with
/// percentage shares.
pub fn display_nutrition_summary(total: &NutritionVector) {
    println!();
    println!("=== Nutritional Values ===");
    println!();

    let values = total.as_array();
    let sum: f64 = values.iter().sum();

    let max_name_len = NutritionVector::FIELD_NAMES
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(10);

    for (name, value) in NutritionVector::FIELD_NAMES.iter().zip(values) {
        let percent = if sum > 0.0 { value / sum * 100.0 } else { 0.0 };
        println!(
            "  {:<width$} {:>8.0}  ({:>5.1}%)",
            name,
            value.round(),
            percent,
            width = max_name_len
        );
    }
    println!();
}

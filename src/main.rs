use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

use diet_recommender_rs::calculator::{
    aggregate_nutrition, allocate, calorie_targets, classify_bmi, compute_bmi, compute_bmr,
    maintenance_calories,
};
use diet_recommender_rs::cli::{Cli, Command};
use diet_recommender_rs::engine::{BmiReport, RecommendationEngine};
use diet_recommender_rs::error::{DietError, Result};
use diet_recommender_rs::interface::{
    collect_profile, display_bmi, display_calorie_targets, display_meal_shares,
    display_nutrition_summary, display_recommendation, prompt_meal_choices, prompt_meal_count,
    prompt_plan, prompt_yes_no,
};
use diet_recommender_rs::models::{ActivityLevel, Gender, Profile};
use diet_recommender_rs::services::{CatalogRecommender, ImageIndex, ImageLookup, NoImages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Recommend => cmd_recommend(&cli.catalog, cli.images.as_deref(), cli.count, cli.seed),
        Command::Metrics {
            age,
            height,
            weight,
            gender,
            activity,
        } => cmd_metrics(age, height, weight, &gender, activity),
        Command::Allocate { calories, meals } => cmd_allocate(calories, meals),
    }
}

/// Interactive form, generate action, and result display.
fn cmd_recommend(
    catalog: &str,
    images: Option<&str>,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let path = Path::new(catalog);

    if !path.exists() {
        eprintln!("Recipe catalog not found: {}", catalog);
        eprintln!("Pass --catalog with a path to a recipe CSV file.");
        return Ok(());
    }

    let recommender = CatalogRecommender::from_csv_path(path, count)?;
    if recommender.is_empty() {
        println!("The recipe catalog is empty.");
        return Ok(());
    }
    println!("Loaded {} recipes", recommender.len());
    println!();

    match images {
        Some(images_path) => {
            let images = ImageIndex::from_json_path(images_path)?;
            println!("Loaded {} image links", images.len());
            run_recommend(recommender, images, seed)
        }
        None => run_recommend(recommender, NoImages, seed),
    }
}

fn run_recommend<I: ImageLookup>(
    recommender: CatalogRecommender,
    images: I,
    seed: Option<u64>,
) -> Result<()> {
    let profile = collect_profile()?;
    let plan = prompt_plan()?;
    let meal_count = prompt_meal_count()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!();
    println!("Generating recommendations...");

    let engine = RecommendationEngine::new(recommender, images);
    let recommendation = engine.generate(&profile, plan, meal_count, &mut rng)?;

    display_bmi(&recommendation.bmi);
    display_calorie_targets(&recommendation.plan_targets);
    display_recommendation(&recommendation);

    if prompt_yes_no("Choose a meal composition for a nutrition summary?", true)? {
        let choices = prompt_meal_choices(&recommendation.meals)?;
        let total = aggregate_nutrition(&choices);
        display_nutrition_summary(&total);
    }

    Ok(())
}

/// Non-interactive BMI/BMR/calorie-target printout.
fn cmd_metrics(age: u32, height: f64, weight: f64, gender: &str, activity: usize) -> Result<()> {
    let gender = Gender::from_label(gender)?;
    if activity == 0 {
        return Err(DietError::InvalidInput(
            "Activity level must be between 1 and 5".to_string(),
        ));
    }
    let activity = ActivityLevel::from_index(activity - 1)?;
    let profile = Profile::new(age, height, weight, gender, activity)?;

    let bmi = compute_bmi(profile.weight_kg, profile.height_cm)?;
    let (category, color) = classify_bmi(bmi);
    display_bmi(&BmiReport {
        bmi,
        category,
        color,
    });

    let bmr = compute_bmr(&profile);
    let maintenance = maintenance_calories(&profile);
    println!();
    println!("BMR: {:.2} Calories/day", bmr);
    println!(
        "Maintenance ({}): {:.2} Calories/day",
        profile.activity.label(),
        maintenance
    );

    display_calorie_targets(&calorie_targets(maintenance)?);
    println!();

    Ok(())
}

/// Print meal shares for a calorie total and meal count.
fn cmd_allocate(calories: f64, meals: u8) -> Result<()> {
    let shares = allocate(calories, meals)?;
    display_meal_shares(&shares);
    Ok(())
}

use clap::{Parser, Subcommand};

/// DietRecommender — derives calorie targets from body metrics and suggests
/// recipes per meal slot.
#[derive(Parser, Debug)]
#[command(name = "diet_recommender")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog CSV file.
    #[arg(short, long, default_value = "recipes.csv")]
    pub catalog: String,

    /// Optional path to a JSON map of recipe name to image URL.
    #[arg(long)]
    pub images: Option<String>,

    /// Number of recipes to request per meal slot.
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Seed for reproducible nutrition-target sampling.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively collect a profile and generate diet recommendations.
    Recommend,

    /// Print BMI, BMR and plan calorie targets for the given measurements.
    Metrics {
        /// Age in years (2-120).
        #[arg(long)]
        age: u32,

        /// Height in centimeters (50-300).
        #[arg(long)]
        height: f64,

        /// Weight in kilograms (10-300).
        #[arg(long)]
        weight: f64,

        /// Gender: male or female.
        #[arg(long)]
        gender: String,

        /// Activity level, 1 (little/no exercise) to 5 (extra active).
        #[arg(long)]
        activity: usize,
    },

    /// Print the calorie share for each meal slot.
    Allocate {
        /// Total daily calories to split.
        #[arg(long)]
        calories: f64,

        /// Meals per day (3-5).
        #[arg(long, default_value_t = 3)]
        meals: u8,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend
    }
}

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DietError, Result};
use crate::models::{NutritionVector, Recipe};

/// Recommendation service boundary: one call per meal slot, taking the
/// target nutrition vector for that slot.
pub trait RecipeRecommender {
    fn recommend(&self, target: &NutritionVector) -> Result<Vec<Recipe>>;
}

/// Decode a generator payload of the form `{"output": [recipe, ...]}`.
///
/// A malformed payload is an external-service failure; a recipe record
/// lacking a nutrition field is `MissingField`.
pub fn recipes_from_json(payload: &Value) -> Result<Vec<Recipe>> {
    let output = payload
        .get("output")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            DietError::ExternalService("generator payload has no 'output' array".to_string())
        })?;

    output.iter().map(recipe_from_record).collect()
}

fn recipe_from_record(value: &Value) -> Result<Recipe> {
    let record = value.as_object().ok_or_else(|| {
        DietError::ExternalService("recipe record is not a JSON object".to_string())
    })?;

    let name = record
        .get("Name")
        .and_then(Value::as_str)
        .ok_or_else(|| DietError::MissingField("Name".to_string()))?
        .to_string();

    let nutrition = NutritionVector::from_record(record)?;

    Ok(Recipe {
        name,
        nutrition,
        ingredients: string_list(record.get("RecipeIngredientParts")),
        instructions: string_list(record.get("RecipeInstructions")),
        cook_time_min: minutes(record.get("CookTime")),
        prep_time_min: minutes(record.get("PrepTime")),
        total_time_min: minutes(record.get("TotalTime")),
        image_url: None,
    })
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn minutes(value: Option<&Value>) -> u32 {
    value.and_then(Value::as_u64).unwrap_or(0) as u32
}

/// One row of the recipe catalog CSV.
///
/// Ingredient and instruction columns hold `;`-separated lists.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Calories")]
    calories: f64,

    #[serde(rename = "FatContent")]
    fat: f64,

    #[serde(rename = "SaturatedFatContent")]
    saturated_fat: f64,

    #[serde(rename = "CholesterolContent")]
    cholesterol: f64,

    #[serde(rename = "SodiumContent")]
    sodium: f64,

    #[serde(rename = "CarbohydrateContent")]
    carbs: f64,

    #[serde(rename = "FiberContent")]
    fiber: f64,

    #[serde(rename = "SugarContent")]
    sugar: f64,

    #[serde(rename = "ProteinContent")]
    protein: f64,

    #[serde(rename = "RecipeIngredientParts", default)]
    ingredients: String,

    #[serde(rename = "RecipeInstructions", default)]
    instructions: String,

    #[serde(rename = "CookTime", default)]
    cook_time_min: u32,

    #[serde(rename = "PrepTime", default)]
    prep_time_min: u32,

    #[serde(rename = "TotalTime", default)]
    total_time_min: u32,
}

impl CatalogRow {
    fn into_recipe(self) -> Recipe {
        Recipe {
            name: self.name,
            nutrition: NutritionVector {
                calories: self.calories,
                fat: self.fat,
                saturated_fat: self.saturated_fat,
                cholesterol: self.cholesterol,
                sodium: self.sodium,
                carbs: self.carbs,
                fiber: self.fiber,
                sugar: self.sugar,
                protein: self.protein,
            },
            ingredients: split_list(&self.ingredients),
            instructions: split_list(&self.instructions),
            cook_time_min: self.cook_time_min,
            prep_time_min: self.prep_time_min,
            total_time_min: self.total_time_min,
            image_url: None,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Local stand-in for the external generator, backed by a CSV recipe
/// catalog. Ranks candidates by distance to the target nutrition vector
/// and returns the closest `max_results`.
pub struct CatalogRecommender {
    recipes: Vec<Recipe>,
    max_results: usize,
}

impl CatalogRecommender {
    pub fn new(recipes: Vec<Recipe>, max_results: usize) -> Self {
        Self {
            recipes,
            max_results: max_results.max(1),
        }
    }

    /// Load the catalog from a CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, max_results: usize) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut recipes = Vec::new();
        for row in reader.deserialize::<CatalogRow>() {
            recipes.push(row?.into_recipe());
        }
        Ok(Self::new(recipes, max_results))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Relative squared distance between candidate and target, per field.
///
/// Each term is scaled by the target value so large-magnitude fields
/// (calories, sodium) do not drown out the rest.
fn target_distance(candidate: &NutritionVector, target: &NutritionVector) -> f64 {
    candidate
        .as_array()
        .iter()
        .zip(target.as_array())
        .map(|(&c, t)| {
            let diff = (c - t) / t.abs().max(1.0);
            diff * diff
        })
        .sum()
}

impl RecipeRecommender for CatalogRecommender {
    fn recommend(&self, target: &NutritionVector) -> Result<Vec<Recipe>> {
        if self.recipes.is_empty() {
            return Err(DietError::EmptyCatalog);
        }

        let mut scored: Vec<(f64, &Recipe)> = self
            .recipes
            .iter()
            .map(|recipe| (target_distance(&recipe.nutrition, target), recipe))
            .collect();

        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(self.max_results)
            .map(|(_, recipe)| recipe.clone())
            .collect())
    }
}

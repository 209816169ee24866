use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DietError, Result};

/// The 9 nutrition fields carried by every recipe and every generator target.
///
/// Field names match the external service's spelling exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionVector {
    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "FatContent")]
    pub fat: f64,

    #[serde(rename = "SaturatedFatContent")]
    pub saturated_fat: f64,

    #[serde(rename = "CholesterolContent")]
    pub cholesterol: f64,

    #[serde(rename = "SodiumContent")]
    pub sodium: f64,

    #[serde(rename = "CarbohydrateContent")]
    pub carbs: f64,

    #[serde(rename = "FiberContent")]
    pub fiber: f64,

    #[serde(rename = "SugarContent")]
    pub sugar: f64,

    #[serde(rename = "ProteinContent")]
    pub protein: f64,
}

impl NutritionVector {
    /// Field names in display order, matching `as_array`.
    pub const FIELD_NAMES: [&'static str; 9] = [
        "Calories",
        "FatContent",
        "SaturatedFatContent",
        "CholesterolContent",
        "SodiumContent",
        "CarbohydrateContent",
        "FiberContent",
        "SugarContent",
        "ProteinContent",
    ];

    /// All-zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Values in the same order as `FIELD_NAMES`.
    pub fn as_array(&self) -> [f64; 9] {
        [
            self.calories,
            self.fat,
            self.saturated_fat,
            self.cholesterol,
            self.sodium,
            self.carbs,
            self.fiber,
            self.sugar,
            self.protein,
        ]
    }

    /// Elementwise add another vector into this one.
    pub fn add(&mut self, other: &NutritionVector) {
        self.calories += other.calories;
        self.fat += other.fat;
        self.saturated_fat += other.saturated_fat;
        self.cholesterol += other.cholesterol;
        self.sodium += other.sodium;
        self.carbs += other.carbs;
        self.fiber += other.fiber;
        self.sugar += other.sugar;
        self.protein += other.protein;
    }

    /// Build from a raw external-service record.
    ///
    /// Every field must be present and numeric.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self> {
        Ok(Self {
            calories: field(record, "Calories")?,
            fat: field(record, "FatContent")?,
            saturated_fat: field(record, "SaturatedFatContent")?,
            cholesterol: field(record, "CholesterolContent")?,
            sodium: field(record, "SodiumContent")?,
            carbs: field(record, "CarbohydrateContent")?,
            fiber: field(record, "FiberContent")?,
            sugar: field(record, "SugarContent")?,
            protein: field(record, "ProteinContent")?,
        })
    }
}

fn field(record: &Map<String, Value>, name: &str) -> Result<f64> {
    record
        .get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| DietError::MissingField(name.to_string()))
}

/// A recipe returned by the recommendation service.
///
/// The image URL is attached after lookup; a miss leaves it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(flatten)]
    pub nutrition: NutritionVector,

    #[serde(rename = "RecipeIngredientParts", default)]
    pub ingredients: Vec<String>,

    #[serde(rename = "RecipeInstructions", default)]
    pub instructions: Vec<String>,

    #[serde(rename = "CookTime", default)]
    pub cook_time_min: u32,

    #[serde(rename = "PrepTime", default)]
    pub prep_time_min: u32,

    #[serde(rename = "TotalTime", default)]
    pub total_time_min: u32,

    #[serde(rename = "image_link", default)]
    pub image_url: Option<String>,
}

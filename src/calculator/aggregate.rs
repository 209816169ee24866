use crate::models::{NutritionVector, Recipe};

/// Sum the nutrition fields of the selected recipes elementwise.
///
/// An empty selection yields the all-zero vector.
pub fn aggregate_nutrition(selected: &[Recipe]) -> NutritionVector {
    let mut total = NutritionVector::zero();
    for recipe in selected {
        total.add(&recipe.nutrition);
    }
    total
}

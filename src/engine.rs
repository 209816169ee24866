use rand::Rng;

use crate::calculator::metrics::{BmiCategory, SeverityColor};
use crate::calculator::plans::PlanTarget;
use crate::calculator::{
    allocate, calorie_targets, classify_bmi, compute_bmi, daily_calories, maintenance_calories,
    nutrition_target,
};
use crate::error::Result;
use crate::models::{MealSlot, Profile, Recipe, WeightLossPlan};
use crate::services::{ImageLookup, RecipeRecommender};

/// BMI value with its band and severity color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
    pub color: SeverityColor,
}

/// Recipes recommended for one meal slot.
#[derive(Debug, Clone)]
pub struct MealRecommendation {
    pub slot: MealSlot,
    pub target_calories: f64,
    pub recipes: Vec<Recipe>,
}

/// Complete result of one generate action. Held by the caller; the engine
/// keeps no state between actions.
#[derive(Debug, Clone)]
pub struct DietRecommendation {
    pub bmi: BmiReport,
    pub maintenance_calories: f64,
    pub plan: WeightLossPlan,
    pub plan_targets: Vec<PlanTarget>,
    pub daily_calories: f64,
    pub meals: Vec<MealRecommendation>,
}

/// Orchestrates one generate action over the injected recommendation and
/// image services.
pub struct RecommendationEngine<R, I> {
    recommender: R,
    images: I,
}

impl<R: RecipeRecommender, I: ImageLookup> RecommendationEngine<R, I> {
    pub fn new(recommender: R, images: I) -> Self {
        Self {
            recommender,
            images,
        }
    }

    /// Compute metrics, allocate meal shares, and fetch recipes per slot.
    ///
    /// The first recommender failure aborts the whole action; image-lookup
    /// misses only leave recipes without an image.
    pub fn generate<G: Rng + ?Sized>(
        &self,
        profile: &Profile,
        plan: WeightLossPlan,
        meal_count: u8,
        rng: &mut G,
    ) -> Result<DietRecommendation> {
        let bmi = compute_bmi(profile.weight_kg, profile.height_cm)?;
        let (category, color) = classify_bmi(bmi);

        let maintenance = maintenance_calories(profile);
        let plan_targets = calorie_targets(maintenance)?;
        let daily = daily_calories(maintenance, plan)?;

        let shares = allocate(daily, meal_count)?;

        let mut meals = Vec::with_capacity(shares.len());
        for share in shares {
            let target = nutrition_target(share.slot, share.calories, rng);
            let mut recipes = self.recommender.recommend(&target)?;

            for recipe in &mut recipes {
                recipe.image_url = self.images.image_url(&recipe.name);
            }

            meals.push(MealRecommendation {
                slot: share.slot,
                target_calories: share.calories,
                recipes,
            });
        }

        Ok(DietRecommendation {
            bmi: BmiReport {
                bmi,
                category,
                color,
            },
            maintenance_calories: maintenance,
            plan,
            plan_targets,
            daily_calories: daily,
            meals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DietError;
    use crate::models::{ActivityLevel, Gender, NutritionVector};
    use crate::services::NoImages;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FixedRecommender;

    impl RecipeRecommender for FixedRecommender {
        fn recommend(&self, target: &NutritionVector) -> Result<Vec<Recipe>> {
            Ok(vec![Recipe {
                name: format!("Dish for {:.0} cal", target.calories),
                nutrition: target.clone(),
                ingredients: Vec::new(),
                instructions: Vec::new(),
                cook_time_min: 10,
                prep_time_min: 5,
                total_time_min: 15,
                image_url: None,
            }])
        }
    }

    struct FailingRecommender;

    impl RecipeRecommender for FailingRecommender {
        fn recommend(&self, _target: &NutritionVector) -> Result<Vec<Recipe>> {
            Err(DietError::ExternalService("generator is down".to_string()))
        }
    }

    fn sample_profile() -> Profile {
        Profile::new(30, 175.0, 70.0, Gender::Male, ActivityLevel::Sedentary).unwrap()
    }

    #[test]
    fn test_generate_builds_full_result() {
        let engine = RecommendationEngine::new(FixedRecommender, NoImages);
        let mut rng = StdRng::seed_from_u64(1);

        let result = engine
            .generate(&sample_profile(), WeightLossPlan::Loss, 4, &mut rng)
            .unwrap();

        assert_eq!(result.bmi.bmi, 22.86);
        assert_eq!(result.bmi.category, BmiCategory::Normal);
        assert_eq!(result.plan_targets.len(), 4);
        assert_eq!(result.meals.len(), 4);
        assert!((result.daily_calories - result.maintenance_calories * 0.8).abs() < 1e-9);

        let slot_total: f64 = result.meals.iter().map(|m| m.target_calories).sum();
        assert!((slot_total - result.daily_calories).abs() < 1e-9);
    }

    #[test]
    fn test_generate_aborts_on_service_failure() {
        let engine = RecommendationEngine::new(FailingRecommender, NoImages);
        let mut rng = StdRng::seed_from_u64(1);

        let err = engine
            .generate(&sample_profile(), WeightLossPlan::Maintain, 3, &mut rng)
            .unwrap_err();
        assert!(matches!(err, DietError::ExternalService(_)));
    }

    #[test]
    fn test_generate_rejects_bad_meal_count() {
        let engine = RecommendationEngine::new(FixedRecommender, NoImages);
        let mut rng = StdRng::seed_from_u64(1);

        let err = engine
            .generate(&sample_profile(), WeightLossPlan::Maintain, 6, &mut rng)
            .unwrap_err();
        assert!(matches!(err, DietError::InvalidInput(_)));
    }
}

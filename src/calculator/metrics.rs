use crate::calculator::constants::{BMI_NORMAL_MAX, BMI_OVERWEIGHT_MAX, BMI_UNDERWEIGHT_MAX};
use crate::error::{DietError, Result};
use crate::models::{Gender, Profile};

/// BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

/// Severity color shown next to the BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityColor {
    Red,
    Blue,
    Orange,
}

impl SeverityColor {
    pub fn label(&self) -> &'static str {
        match self {
            SeverityColor::Red => "Red",
            SeverityColor::Blue => "Blue",
            SeverityColor::Orange => "Orange",
        }
    }
}

/// Body mass index: `weight / (height/100)^2`, rounded to 2 decimals.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(DietError::InvalidInput(format!(
            "Cannot compute BMI for weight {} kg, height {} cm",
            weight_kg, height_cm
        )));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 100.0).round() / 100.0)
}

/// Classify a BMI value. Lower band bounds are inclusive.
pub fn classify_bmi(bmi: f64) -> (BmiCategory, SeverityColor) {
    if bmi < BMI_UNDERWEIGHT_MAX {
        (BmiCategory::Underweight, SeverityColor::Red)
    } else if bmi < BMI_NORMAL_MAX {
        (BmiCategory::Normal, SeverityColor::Blue)
    } else if bmi < BMI_OVERWEIGHT_MAX {
        (BmiCategory::Overweight, SeverityColor::Orange)
    } else {
        (BmiCategory::Obesity, SeverityColor::Red)
    }
}

/// Basal metabolic rate via the Mifflin-St Jeor equation.
///
/// Male: `10w + 6.25h - 5a + 5`; Female: `10w + 6.25h - 5a - 161`.
pub fn compute_bmr(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily calories needed to maintain current weight: BMR times the
/// activity factor.
pub fn maintenance_calories(profile: &Profile) -> f64 {
    compute_bmr(profile) * profile.activity.factor()
}

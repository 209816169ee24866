use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};

/// Biological gender used by the Mifflin-St Jeor BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Parse from user input (case-insensitive).
    pub fn from_label(label: &str) -> Result<Self> {
        match label.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(DietError::InvalidInput(format!(
                "Unrecognized gender: {}",
                other
            ))),
        }
    }
}

/// Weekly activity level, ordered from sedentary to extra active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little/no exercise",
            ActivityLevel::Light => "Light exercise",
            ActivityLevel::Moderate => "Moderate exercise (3-5 days/wk)",
            ActivityLevel::VeryActive => "Very active (6-7 days/wk)",
            ActivityLevel::ExtraActive => "Extra active (very active & physical job)",
        }
    }

    /// Multiplier applied to BMR to estimate maintenance calories.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Parse from a zero-based selector index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            DietError::InvalidInput(format!("Activity index out of range: {}", index))
        })
    }

    /// Parse from a display label (exact match).
    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == label)
            .ok_or_else(|| DietError::InvalidInput(format!("Unrecognized activity: {}", label)))
    }
}

/// Weight-loss plan, ordered from maintenance to extreme loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightLossPlan {
    Maintain,
    MildLoss,
    Loss,
    ExtremeLoss,
}

impl WeightLossPlan {
    pub const ALL: [WeightLossPlan; 4] = [
        WeightLossPlan::Maintain,
        WeightLossPlan::MildLoss,
        WeightLossPlan::Loss,
        WeightLossPlan::ExtremeLoss,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeightLossPlan::Maintain => "Maintain weight",
            WeightLossPlan::MildLoss => "Mild weight loss",
            WeightLossPlan::Loss => "Weight loss",
            WeightLossPlan::ExtremeLoss => "Extreme weight loss",
        }
    }

    /// Multiplier applied to maintenance calories. Always in (0, 1].
    pub fn multiplier(&self) -> f64 {
        match self {
            WeightLossPlan::Maintain => 1.0,
            WeightLossPlan::MildLoss => 0.9,
            WeightLossPlan::Loss => 0.8,
            WeightLossPlan::ExtremeLoss => 0.6,
        }
    }

    /// Expected weekly weight change shown next to the calorie target.
    pub fn weekly_change(&self) -> &'static str {
        match self {
            WeightLossPlan::Maintain => "-0 kg/week",
            WeightLossPlan::MildLoss => "-0.25 kg/week",
            WeightLossPlan::Loss => "-0.5 kg/week",
            WeightLossPlan::ExtremeLoss => "-1 kg/week",
        }
    }

    /// Parse from a zero-based selector index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| DietError::InvalidInput(format!("Plan index out of range: {}", index)))
    }
}

/// A user's body metrics and activity level.
///
/// Validated on construction, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
}

impl Profile {
    pub fn new(
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        gender: Gender,
        activity: ActivityLevel,
    ) -> Result<Self> {
        if !(2..=120).contains(&age) {
            return Err(DietError::InvalidInput(format!(
                "Age must be between 2 and 120, got {}",
                age
            )));
        }
        if !height_cm.is_finite() || !(50.0..=300.0).contains(&height_cm) {
            return Err(DietError::InvalidInput(format!(
                "Height must be between 50 and 300 cm, got {}",
                height_cm
            )));
        }
        if !weight_kg.is_finite() || !(10.0..=300.0).contains(&weight_kg) {
            return Err(DietError::InvalidInput(format!(
                "Weight must be between 10 and 300 kg, got {}",
                weight_kg
            )));
        }

        Ok(Self {
            age,
            height_cm,
            weight_kg,
            gender,
            activity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_validation() {
        assert!(Profile::new(30, 175.0, 70.0, Gender::Male, ActivityLevel::Sedentary).is_ok());

        // Boundaries are inclusive
        assert!(Profile::new(2, 50.0, 10.0, Gender::Female, ActivityLevel::Light).is_ok());
        assert!(Profile::new(120, 300.0, 300.0, Gender::Male, ActivityLevel::ExtraActive).is_ok());

        assert!(Profile::new(1, 175.0, 70.0, Gender::Male, ActivityLevel::Sedentary).is_err());
        assert!(Profile::new(121, 175.0, 70.0, Gender::Male, ActivityLevel::Sedentary).is_err());
        assert!(Profile::new(30, 49.0, 70.0, Gender::Male, ActivityLevel::Sedentary).is_err());
        assert!(Profile::new(30, 175.0, 9.0, Gender::Male, ActivityLevel::Sedentary).is_err());
        assert!(Profile::new(30, f64::NAN, 70.0, Gender::Male, ActivityLevel::Sedentary).is_err());
    }

    #[test]
    fn test_gender_from_label() {
        assert_eq!(Gender::from_label("Male").unwrap(), Gender::Male);
        assert_eq!(Gender::from_label("female").unwrap(), Gender::Female);
        assert!(Gender::from_label("other").is_err());
    }

    #[test]
    fn test_activity_from_index_and_label() {
        assert_eq!(
            ActivityLevel::from_index(0).unwrap(),
            ActivityLevel::Sedentary
        );
        assert_eq!(
            ActivityLevel::from_index(4).unwrap(),
            ActivityLevel::ExtraActive
        );
        assert!(ActivityLevel::from_index(5).is_err());

        assert_eq!(
            ActivityLevel::from_label("Light exercise").unwrap(),
            ActivityLevel::Light
        );
        assert!(ActivityLevel::from_label("Unknown").is_err());
    }

    #[test]
    fn test_activity_factors_ordered() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.factor()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_plan_multipliers_in_range() {
        for plan in WeightLossPlan::ALL {
            let m = plan.multiplier();
            assert!(m > 0.0 && m <= 1.0, "multiplier {} out of (0,1]", m);
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::menu::dto::MealType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Activity levels understood by the backend (FAO/WHO factors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentário",
            ActivityLevel::Light => "Leve (1-3x/semana)",
            ActivityLevel::Moderate => "Moderado (3-5x/semana)",
            ActivityLevel::Active => "Ativo (6-7x/semana)",
            ActivityLevel::VeryActive => "Muito ativo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Body profile sent to `POST /api/v1/profile`, and reused verbatim as the
/// `profile` field of the analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub deficit_percent: f64,
    pub meals_per_day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_mass_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTarget {
    pub nome: String,
    pub percentual: u32,
    pub calorias: f64,
    pub proteina_g: f64,
    pub carboidrato_g: f64,
    pub gordura_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    pub body_fat_percent: f64,
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
}

/// Response of the profile computation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileTargets {
    pub target_calories: u32,
    pub macros: Macros,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmr: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdee: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meals: BTreeMap<MealType, MealTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_composition: Option<BodyComposition>,
}

/// Backend targets plus the profile that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedProfile {
    #[serde(flatten)]
    pub targets: ProfileTargets,
    pub request: Profile,
}

impl ComputedProfile {
    pub fn new(targets: ProfileTargets, request: Profile) -> Self {
        Self { targets, request }
    }

    pub fn status_label(&self) -> String {
        format!("{} kcal", self.targets.target_calories)
    }
}

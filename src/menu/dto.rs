use serde::{Deserialize, Serialize};

use crate::profile::dto::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    CafeDaManha,
    LancheManha,
    #[default]
    Almoco,
    LancheTarde,
    Jantar,
    Ceia,
}

impl MealType {
    pub const ALL: [MealType; 6] = [
        MealType::CafeDaManha,
        MealType::LancheManha,
        MealType::Almoco,
        MealType::LancheTarde,
        MealType::Jantar,
        MealType::Ceia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::CafeDaManha => "cafe_da_manha",
            MealType::LancheManha => "lanche_manha",
            MealType::Almoco => "almoco",
            MealType::LancheTarde => "lanche_tarde",
            MealType::Jantar => "jantar",
            MealType::Ceia => "ceia",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealType::CafeDaManha => "Café da Manhã",
            MealType::LancheManha => "Lanche da Manhã",
            MealType::Almoco => "Almoço",
            MealType::LancheTarde => "Lanche da Tarde",
            MealType::Jantar => "Jantar",
            MealType::Ceia => "Ceia",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// Body of `POST /api/v1/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub profile: Profile,
    pub menu_text: String,
    pub meal_type: MealType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodChoice {
    pub alimento: String,
    pub gramas: f64,
    pub calorias_estimadas: f64,
    pub proteina_g: f64,
    pub carboidrato_g: f64,
    pub gordura_g: f64,
    #[serde(default)]
    pub justificativa: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    pub calorias: f64,
    pub proteina_g: f64,
    pub carboidrato_g: f64,
    pub gordura_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub escolhas: Vec<FoodChoice>,
    pub total: MealTotals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dica: Option<String>,
}

impl Recommendation {
    /// The tip, when the backend supplied a non-blank one.
    pub fn tip(&self) -> Option<&str> {
        self.dica.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub recommendation: Recommendation,
}

use serde::{Deserialize, Serialize};

use super::dto::MealType;

/// The menu form: free text plus the selected meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuForm {
    #[serde(default)]
    pub menu: String,
    #[serde(default, rename = "meal-type")]
    pub meal_type: String,
}

impl MenuForm {
    pub fn new(menu: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            menu: menu.into(),
            meal_type: meal_type.as_str().into(),
        }
    }

    /// Unknown or empty selections fall back to lunch.
    pub fn meal(&self) -> MealType {
        MealType::parse(self.meal_type.trim()).unwrap_or_default()
    }
}

#[cfg(test)]
mod form_tests {
    use super::*;

    #[test]
    fn meal_defaults_to_lunch() {
        assert_eq!(MenuForm::default().meal(), MealType::Almoco);
        assert_eq!(MenuForm::new("x", MealType::Jantar).meal(), MealType::Jantar);
        let form = MenuForm {
            menu: "x".into(),
            meal_type: "brunch".into(),
        };
        assert_eq!(form.meal(), MealType::Almoco);
    }
}

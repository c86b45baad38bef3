pub mod dto;
pub mod form;

pub use dto::{AnalyzeRequest, FoodChoice, MealTotals, MealType, Recommendation};
pub use form::MenuForm;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dto::{ActivityLevel, Profile, Sex};
use crate::error::ClientError;

const DEFAULT_DEFICIT: &str = "20";
const DEFAULT_MEALS_PER_DAY: &str = "4";

/// Raw values of the profile form, exactly as the browser submits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub deficit: String,
    #[serde(default, rename = "meals-per-day")]
    pub meals_per_day: String,
    #[serde(default, rename = "body-fat")]
    pub body_fat: String,
    #[serde(default, rename = "lean-mass")]
    pub lean_mass: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            weight: String::new(),
            height: String::new(),
            age: String::new(),
            sex: Sex::default().as_str().into(),
            activity: ActivityLevel::default().as_str().into(),
            deficit: DEFAULT_DEFICIT.into(),
            meals_per_day: DEFAULT_MEALS_PER_DAY.into(),
            body_fat: String::new(),
            lean_mass: String::new(),
        }
    }
}

impl ProfileForm {
    pub fn from_profile(p: &Profile) -> Self {
        Self {
            weight: p.weight_kg.to_string(),
            height: p.height_cm.to_string(),
            age: p.age.to_string(),
            sex: p.sex.as_str().into(),
            activity: p.activity_level.as_str().into(),
            deficit: ((p.deficit_percent * 100.0).round() as u32).to_string(),
            meals_per_day: p.meals_per_day.to_string(),
            body_fat: p.body_fat_percent.map(|v| v.to_string()).unwrap_or_default(),
            lean_mass: p.lean_mass_kg.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// Parses and range-checks every field. The deficit is entered as a whole
    /// percentage and sent as a fraction.
    pub fn to_profile(&self) -> Result<Profile, ClientError> {
        let weight_kg: f64 = parse_field("weight_kg", &self.weight)?;
        ensure_positive("weight_kg", weight_kg)?;
        let height_cm: f64 = parse_field("height_cm", &self.height)?;
        ensure_positive("height_cm", height_cm)?;

        let age: u32 = parse_field("age", &self.age)?;
        if age == 0 {
            return Err(ClientError::invalid("age", "must be greater than zero"));
        }

        let sex = Sex::parse(self.sex.trim())
            .ok_or_else(|| ClientError::invalid("sex", format!("unknown value '{}'", self.sex)))?;
        let activity_level = ActivityLevel::parse(self.activity.trim()).ok_or_else(|| {
            ClientError::invalid("activity_level", format!("unknown value '{}'", self.activity))
        })?;

        // Fractional percentages are truncated to whole points.
        let deficit = parse_field::<f64>("deficit_percent", &self.deficit)?.trunc();
        if !(1.0..=100.0).contains(&deficit) {
            return Err(ClientError::invalid("deficit_percent", "must be between 1 and 100"));
        }

        let meals_per_day: u32 = parse_field("meals_per_day", &self.meals_per_day)?;
        if !(1..=12).contains(&meals_per_day) {
            return Err(ClientError::invalid("meals_per_day", "must be between 1 and 12"));
        }

        let body_fat_percent = parse_optional::<f64>("body_fat_percent", &self.body_fat)?;
        if let Some(bf) = body_fat_percent {
            if bf <= 0.0 || bf > 100.0 {
                return Err(ClientError::invalid("body_fat_percent", "must be between 0 and 100"));
            }
        }
        let lean_mass_kg = parse_optional::<f64>("lean_mass_kg", &self.lean_mass)?;
        if let Some(lm) = lean_mass_kg {
            ensure_positive("lean_mass_kg", lm)?;
        }

        Ok(Profile {
            weight_kg,
            height_cm,
            age,
            sex,
            activity_level,
            deficit_percent: deficit / 100.0,
            meals_per_day,
            body_fat_percent,
            lean_mass_kg,
        })
    }
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ClientError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ClientError::invalid(field, "is required"));
    }
    raw.parse::<T>()
        .map_err(|_| ClientError::invalid(field, format!("'{raw}' is not a number")))
}

fn parse_optional<T: FromStr>(field: &'static str, raw: &str) -> Result<Option<T>, ClientError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_field(field, raw).map(Some)
}

fn ensure_positive(field: &'static str, v: f64) -> Result<(), ClientError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ClientError::invalid(field, "must be positive"))
    }
}

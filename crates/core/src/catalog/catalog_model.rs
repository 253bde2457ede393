//! Catalog domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Category of a catalog meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
        };
        write!(f, "{label}")
    }
}

/// Category filter for the catalog browser: `All` passes everything through,
/// a concrete category matches exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(MealCategory),
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(CategoryFilter::All),
            "Breakfast" => Ok(CategoryFilter::Category(MealCategory::Breakfast)),
            "Lunch" => Ok(CategoryFilter::Category(MealCategory::Lunch)),
            "Dinner" => Ok(CategoryFilter::Category(MealCategory::Dinner)),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown category '{other}', expected All, Breakfast, Lunch, or Dinner"
            ))),
        }
    }
}

/// A bundled reference meal. Static data, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeal {
    pub id: String,
    pub name: String,
    pub description: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub image: String,
    pub category: MealCategory,
    pub prep_time: String,
    pub ingredients: Vec<String>,
}

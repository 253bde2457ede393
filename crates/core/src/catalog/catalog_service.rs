//! Catalog service over the embedded meal data.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::catalog::catalog_model::{CatalogMeal, CategoryFilter};

/// Static catalog loaded from embedded JSON.
static MEAL_CATALOG: Lazy<MealCatalog> = Lazy::new(|| {
    let json = include_str!("meals.json");
    serde_json::from_str(json).expect("Failed to parse meals.json")
});

#[derive(Debug, Deserialize)]
struct MealCatalog {
    meals: Vec<CatalogMeal>,
}

/// Read-only access to the bundled meal catalog.
#[derive(Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        CatalogService
    }

    /// All catalog meals in bundled order.
    pub fn meals(&self) -> &'static [CatalogMeal] {
        &MEAL_CATALOG.meals
    }

    /// Meals matching the filter, preserving bundled order.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&'static CatalogMeal> {
        match filter {
            CategoryFilter::All => MEAL_CATALOG.meals.iter().collect(),
            CategoryFilter::Category(category) => MEAL_CATALOG
                .meals
                .iter()
                .filter(|meal| meal.category == category)
                .collect(),
        }
    }
}

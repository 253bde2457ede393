//! Saved meal domain models.

use serde::{Deserialize, Serialize};

use crate::plans::PlannedMeal;

/// A meal the user explicitly saved. Persisted as part of the saved-meal
/// list under a single storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMeal {
    /// Millisecond-timestamp string. Uniqueness is not guaranteed: two saves
    /// within the same millisecond collide.
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    /// Constant placeholder regardless of the source meal.
    pub image: String,
    /// Calendar day of the save, `YYYY-MM-DD`.
    pub date: String,
}

/// Input model for saving a meal. Id, image, and date are assigned by the
/// service at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedMeal {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl From<&PlannedMeal> for NewSavedMeal {
    fn from(meal: &PlannedMeal) -> Self {
        NewSavedMeal {
            name: meal.name.clone(),
            calories: meal.calories,
            protein: meal.protein,
            carbs: meal.carbs,
            fats: meal.fats,
        }
    }
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The meal was appended and persisted.
    Saved(SavedMeal),
    /// An existing entry matched the duplicate predicate; nothing changed.
    AlreadySaved,
}

/// Equality predicate deciding whether a candidate is "already saved".
///
/// Deliberately weak and explicit: the default keys on name + calories,
/// which can false-positive on coincidental matches and false-negative when
/// a regenerated meal drifts by a few calories. Callers may inject a
/// stricter predicate.
pub type DuplicatePredicate = fn(&SavedMeal, &NewSavedMeal) -> bool;

/// Default duplicate key: identical name and identical calorie value.
pub fn name_and_calories(existing: &SavedMeal, candidate: &NewSavedMeal) -> bool {
    existing.name == candidate.name && existing.calories == candidate.calories
}

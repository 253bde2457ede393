use async_trait::async_trait;

use crate::errors::Result;
use crate::saved_meals::saved_meals_model::{NewSavedMeal, SaveOutcome, SavedMeal};

/// Trait for saved-meal service operations.
#[async_trait]
pub trait SavedMealServiceTrait: Send + Sync {
    /// Load the persisted list. An absent or unreadable entry loads as empty.
    fn load(&self) -> Result<Vec<SavedMeal>>;

    /// Save a meal unless the duplicate predicate matches an existing entry.
    async fn save(&self, meal: NewSavedMeal) -> Result<SaveOutcome>;

    /// Remove a meal by id. Returns the number of entries removed; an
    /// unknown id removes nothing and leaves the list unchanged.
    async fn remove(&self, id: &str) -> Result<usize>;

    /// Erase the entire persisted store. Invoked on logout; not scoped to
    /// saved meals.
    async fn clear(&self) -> Result<()>;
}

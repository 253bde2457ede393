//! Saved meals module - the user-curated, persisted meal list.

mod saved_meals_model;
mod saved_meals_service;
mod saved_meals_traits;

pub use saved_meals_model::{
    name_and_calories, DuplicatePredicate, NewSavedMeal, SaveOutcome, SavedMeal,
};
pub use saved_meals_service::{group_by_date, SavedMealService};
pub use saved_meals_traits::SavedMealServiceTrait;

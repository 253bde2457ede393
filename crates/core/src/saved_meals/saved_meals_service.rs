use async_trait::async_trait;
use chrono::{Local, Utc};
use log::{debug, error};
use std::sync::Arc;

use crate::constants::{DATE_FORMAT, PLACEHOLDER_MEAL_IMAGE, SAVED_MEALS_KEY};
use crate::errors::Result;
use crate::saved_meals::saved_meals_model::{
    name_and_calories, DuplicatePredicate, NewSavedMeal, SaveOutcome, SavedMeal,
};
use crate::saved_meals::saved_meals_traits::SavedMealServiceTrait;
use crate::store::StoreRepositoryTrait;

/// Service over the persisted saved-meal list.
///
/// The whole list lives as one JSON array under `saved_meals`; every mutation
/// is a read-modify-write of that array. The storage layer's single writer
/// serializes those cycles - this service performs no locking of its own and
/// would not survive multi-writer use.
pub struct SavedMealService {
    store: Arc<dyn StoreRepositoryTrait>,
    duplicate: DuplicatePredicate,
}

impl SavedMealService {
    pub fn new(store: Arc<dyn StoreRepositoryTrait>) -> Self {
        SavedMealService {
            store,
            duplicate: name_and_calories,
        }
    }

    /// Override the duplicate predicate.
    pub fn with_duplicate_predicate(mut self, predicate: DuplicatePredicate) -> Self {
        self.duplicate = predicate;
        self
    }

    async fn write_list(&self, meals: &[SavedMeal]) -> Result<()> {
        let payload = serde_json::to_string(meals)?;
        self.store.put_entry(SAVED_MEALS_KEY, &payload).await
    }
}

#[async_trait]
impl SavedMealServiceTrait for SavedMealService {
    fn load(&self) -> Result<Vec<SavedMeal>> {
        let raw = match self.store.get_entry(SAVED_MEALS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        // A corrupt entry reads as empty; reads stay quiet, writes are loud.
        match serde_json::from_str(&raw) {
            Ok(meals) => Ok(meals),
            Err(e) => {
                error!("Failed to parse saved meals, treating store as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, meal: NewSavedMeal) -> Result<SaveOutcome> {
        let mut meals = self.load()?;

        if meals.iter().any(|existing| (self.duplicate)(existing, &meal)) {
            debug!("Meal '{}' already saved, skipping", meal.name);
            return Ok(SaveOutcome::AlreadySaved);
        }

        let saved = SavedMeal {
            id: Utc::now().timestamp_millis().to_string(),
            name: meal.name,
            calories: meal.calories,
            protein: meal.protein,
            carbs: meal.carbs,
            fats: meal.fats,
            image: PLACEHOLDER_MEAL_IMAGE.to_string(),
            date: Local::now().format(DATE_FORMAT).to_string(),
        };

        meals.push(saved.clone());
        self.write_list(&meals).await?;
        Ok(SaveOutcome::Saved(saved))
    }

    async fn remove(&self, id: &str) -> Result<usize> {
        let meals = self.load()?;
        let before = meals.len();
        let remaining: Vec<SavedMeal> = meals.into_iter().filter(|m| m.id != id).collect();

        let removed = before - remaining.len();
        if removed == 0 {
            debug!("Remove of unknown meal id '{id}' is a no-op");
            return Ok(0);
        }

        self.write_list(&remaining).await?;
        Ok(removed)
    }

    async fn clear(&self) -> Result<()> {
        self.store.clear_all().await
    }
}

/// Group meals by calendar day for the planner surface, newest day first.
/// Relative order within a day follows the stored list.
pub fn group_by_date(meals: &[SavedMeal]) -> Vec<(String, Vec<SavedMeal>)> {
    let mut days: Vec<(String, Vec<SavedMeal>)> = Vec::new();
    for meal in meals {
        match days.iter_mut().find(|(day, _)| *day == meal.date) {
            Some((_, entries)) => entries.push(meal.clone()),
            None => days.push((meal.date.clone(), vec![meal.clone()])),
        }
    }
    days.sort_by(|a, b| b.0.cmp(&a.0));
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SESSION_KEY;
    use crate::store::MemoryStoreRepository;

    fn service() -> (Arc<MemoryStoreRepository>, SavedMealService) {
        let store = Arc::new(MemoryStoreRepository::new());
        let service = SavedMealService::new(store.clone());
        (store, service)
    }

    fn meal(name: &str, calories: f64) -> NewSavedMeal {
        NewSavedMeal {
            name: name.to_string(),
            calories,
            protein: 20.0,
            carbs: 30.0,
            fats: 10.0,
        }
    }

    #[test]
    fn test_load_absent_store_is_empty() {
        let (_, service) = service();
        assert!(service.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_store_is_empty() {
        let store = Arc::new(MemoryStoreRepository::with_entry(
            SAVED_MEALS_KEY,
            "not valid json {",
        ));
        let service = SavedMealService::new(store);
        assert!(service.load().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_assigns_id_date_and_placeholder_image() {
        let (_, service) = service();
        let outcome = service.save(meal("Grilled Chicken Salad", 450.0)).await.unwrap();

        let saved = match outcome {
            SaveOutcome::Saved(saved) => saved,
            SaveOutcome::AlreadySaved => panic!("first save reported as duplicate"),
        };
        assert!(!saved.id.is_empty());
        assert_eq!(saved.image, PLACEHOLDER_MEAL_IMAGE);
        assert_eq!(saved.date.len(), 10); // YYYY-MM-DD

        assert_eq!(service.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_save_keeps_one_entry() {
        let (_, service) = service();
        service.save(meal("Quinoa Bowl", 380.0)).await.unwrap();

        let second = service.save(meal("Quinoa Bowl", 380.0)).await.unwrap();
        assert_eq!(second, SaveOutcome::AlreadySaved);
        assert_eq!(service.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_calorie_drift_bypasses_duplicate_key() {
        let (_, service) = service();
        service.save(meal("Quinoa Bowl", 380.0)).await.unwrap();
        service.save(meal("Quinoa Bowl", 385.0)).await.unwrap();
        assert_eq!(service.load().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_custom_duplicate_predicate_is_honored() {
        fn by_name(existing: &SavedMeal, candidate: &NewSavedMeal) -> bool {
            existing.name == candidate.name
        }

        let store = Arc::new(MemoryStoreRepository::new());
        let service =
            SavedMealService::new(store).with_duplicate_predicate(by_name as DuplicatePredicate);

        service.save(meal("Quinoa Bowl", 380.0)).await.unwrap();
        let outcome = service.save(meal("Quinoa Bowl", 999.0)).await.unwrap();
        assert_eq!(outcome, SaveOutcome::AlreadySaved);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let (_, service) = service();
        service.save(meal("Oat Bowl", 420.0)).await.unwrap();

        let before = service.load().unwrap();
        let removed = service.remove("no-such-id").await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(service.load().unwrap(), before);
    }

    #[tokio::test]
    async fn test_remove_existing_id_persists_remainder() {
        let (_, service) = service();
        service.save(meal("Oat Bowl", 420.0)).await.unwrap();
        service.save(meal("Quinoa Bowl", 380.0)).await.unwrap();

        let id = service.load().unwrap()[0].id.clone();
        let removed = service.remove(&id).await.unwrap();
        assert_eq!(removed, 1);

        let remaining = service.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Quinoa Bowl");
    }

    #[tokio::test]
    async fn test_clear_wipes_the_entire_store() {
        let (store, service) = service();
        service.save(meal("Oat Bowl", 420.0)).await.unwrap();
        store.put_entry(SESSION_KEY, "someone").await.unwrap();

        service.clear().await.unwrap();

        assert!(service.load().unwrap().is_empty());
        assert!(store.get_entry(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_group_by_date_orders_days_newest_first() {
        let mk = |id: &str, date: &str| SavedMeal {
            id: id.to_string(),
            name: format!("meal-{id}"),
            calories: 100.0,
            protein: 1.0,
            carbs: 1.0,
            fats: 1.0,
            image: String::new(),
            date: date.to_string(),
        };

        let meals = vec![
            mk("1", "2026-08-01"),
            mk("2", "2026-08-03"),
            mk("3", "2026-08-01"),
        ];

        let grouped = group_by_date(&meals);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "2026-08-03");
        assert_eq!(grouped[1].0, "2026-08-01");
        let ids: Vec<_> = grouped[1].1.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::StoreEntryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::app_store::dsl::*;
use nutrinest_core::errors::Result;
use nutrinest_core::store::StoreRepositoryTrait;

/// SQLite-backed implementation of the core store trait.
///
/// Reads come from the pool; every mutation goes through the single-writer
/// actor so concurrent read-modify-write cycles from the services cannot
/// interleave their writes.
pub struct StoreRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StoreRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        StoreRepository { pool, writer }
    }
}

#[async_trait]
impl StoreRepositoryTrait for StoreRepository {
    fn get_entry(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let result = app_store
            .filter(store_key.eq(key))
            .select(store_value)
            .first::<String>(&mut conn);

        match result {
            Ok(value) => Ok(Some(value)),
            Err(diesel::result::Error::NotFound) => Ok(None),
            Err(e) => Err(StorageError::from(e).into()),
        }
    }

    async fn put_entry(&self, key: &str, value: &str) -> Result<()> {
        let entry = StoreEntryDB {
            store_key: key.to_string(),
            store_value: value.to_string(),
        };

        self.writer
            .exec(move |conn| {
                diesel::replace_into(app_store)
                    .values(&entry)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_entry(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(app_store.filter(store_key.eq(key)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn clear_all(&self) -> Result<()> {
        self.writer
            .exec(move |conn| {
                diesel::delete(app_store)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, write_actor::spawn_writer};
    use tempfile::TempDir;

    fn repository() -> (TempDir, StoreRepository) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = dir.path().join("test.db");
        let pool = create_pool(db_path.to_str().unwrap()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer(pool.as_ref().clone());
        (dir, StoreRepository::new(pool, writer))
    }

    #[tokio::test]
    async fn test_get_absent_entry_is_none() {
        let (_dir, repo) = repository();
        assert_eq!(repo.get_entry("missing").unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let (_dir, repo) = repository();
        repo.put_entry("saved_meals", "[]").await.unwrap();
        assert_eq!(repo.get_entry("saved_meals").unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_put_replaces_existing_value() {
        let (_dir, repo) = repository();
        repo.put_entry("session", "a").await.unwrap();
        repo.put_entry("session", "b").await.unwrap();
        assert_eq!(repo.get_entry("session").unwrap(), Some("b".to_string()));
    }

    #[tokio::test]
    async fn test_delete_entry_removes_only_that_key() {
        let (_dir, repo) = repository();
        repo.put_entry("session", "x").await.unwrap();
        repo.put_entry("saved_meals", "[]").await.unwrap();

        repo.delete_entry("session").await.unwrap();

        assert_eq!(repo.get_entry("session").unwrap(), None);
        assert!(repo.get_entry("saved_meals").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_absent_entry_is_noop() {
        let (_dir, repo) = repository();
        repo.delete_entry("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_all_wipes_every_key() {
        let (_dir, repo) = repository();
        repo.put_entry("session", "x").await.unwrap();
        repo.put_entry("saved_meals", "[]").await.unwrap();

        repo.clear_all().await.unwrap();

        assert_eq!(repo.get_entry("session").unwrap(), None);
        assert_eq!(repo.get_entry("saved_meals").unwrap(), None);
    }
}

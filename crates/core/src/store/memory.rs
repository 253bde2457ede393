//! In-memory store implementation.
//!
//! Backs service tests and any caller that wants ephemeral, process-local
//! persistence semantics. Shares the trait contract with the SQLite store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::Result;
use crate::store::StoreRepositoryTrait;

/// A `StoreRepositoryTrait` over a mutex-guarded map.
#[derive(Default)]
pub struct MemoryStoreRepository {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, for tests that need pre-existing state.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
        store
    }
}

#[async_trait]
impl StoreRepositoryTrait for MemoryStoreRepository {
    fn get_entry(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned())
    }

    async fn put_entry(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_entry(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("store mutex poisoned")
            .remove(key);
        Ok(())
    }

    async fn clear_all(&self) -> Result<()> {
        self.entries.lock().expect("store mutex poisoned").clear();
        Ok(())
    }
}

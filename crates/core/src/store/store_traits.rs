//! Repository trait for the persisted key-value store.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for the device key-value store.
///
/// Services receive an implementation by injection; nothing in this crate
/// reaches for ambient global state. Values are opaque strings - callers own
/// the (de)serialization of whatever they keep under a key. There is no
/// schema version and no migration of stored values.
#[async_trait]
pub trait StoreRepositoryTrait: Send + Sync {
    /// Get the value stored under `key`. Returns `None` if absent.
    fn get_entry(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any existing value.
    async fn put_entry(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the entry under `key`. Deleting an absent key is a no-op.
    async fn delete_entry(&self, key: &str) -> Result<()>;

    /// Erase every entry in the store.
    async fn clear_all(&self) -> Result<()>;
}

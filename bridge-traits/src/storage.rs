//! Key-Value Storage Abstraction
//!
//! Provides a platform-agnostic trait for JSON key-value persistence.
//!
//! The core uses two independent namespaces, each backed by its own store
//! instance:
//! - a **durable** namespace for user playlists, expected to survive process
//!   restart (desktop: a JSON file; web: localStorage)
//! - a **transient** namespace for session data, expected NOT to survive
//!   restart (desktop: process memory; web: sessionStorage)

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// JSON key-value storage trait
///
/// Values are arbitrary JSON documents; callers own the (de)serialization of
/// their domain types. Absent keys read back as `None`, never as an error.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::KeyValueStore;
///
/// async fn remember(store: &dyn KeyValueStore) -> Result<()> {
///     store.set("app.playlists", serde_json::json!([])).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieve the value stored under `key`
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Delete the value stored under `key`
    ///
    /// Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Check if a key exists without retrieving it
    async fn has_key(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

//! Key-Value Storage Implementations
//!
//! Two stores back the two namespaces the core expects:
//!
//! - [`JsonFileStore`] mirrors its whole map to a JSON file on every write;
//!   playlist data survives process restart.
//! - [`MemoryStore`] lives in process memory; session data deliberately does
//!   not survive restart. It is also the standard fake for tests.

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::KeyValueStore,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Durable key-value store persisted to a single JSON file
///
/// The full map is rewritten on every `set`/`remove`. That is deliberately
/// simple; expected data volumes (a handful of playlists) make incremental
/// persistence not worth the complexity.
pub struct JsonFileStore {
    path: PathBuf,
    cache: RwLock<Map<String, Value>>,
}

impl JsonFileStore {
    /// Open a store backed by `path`, loading any existing contents.
    ///
    /// A missing file starts the store empty. A file that fails to parse is
    /// treated as empty rather than an error, so a corrupted store never
    /// wedges startup.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(BridgeError::Io)?;
        }

        let cache = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Map<String, Value>>(&bytes) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = ?path, error = %e, "Store file unreadable, starting empty");
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(BridgeError::Io(e)),
        };

        debug!(path = ?path, keys = cache.len(), "Opened key-value store");

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Serialize the in-memory map to disk.
    async fn flush(&self, map: &Map<String, Value>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(map)
            .map_err(|e| BridgeError::StorageError(format!("Serialization failed: {}", e)))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(BridgeError::Io)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.cache.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut map = self.cache.write().await;
        map.insert(key.to_string(), value);
        self.flush(&map).await?;
        debug!(key = key, "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.cache.write().await;
        if map.remove(key).is_some() {
            self.flush(&map).await?;
            debug!(key = key, "Removed value");
        }
        Ok(())
    }
}

/// Transient in-memory key-value store
///
/// Backs the per-session namespace; contents are lost when the process
/// exits, which is the expected lifetime for session data.
#[derive(Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.map.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.map.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.map.write().await.remove(key);
        Ok(())
    }
}

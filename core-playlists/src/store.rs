//! Playlist collection store.
//!
//! Holds the in-memory playlist collection and mirrors it wholesale into the
//! durable key-value store after every successful mutation, so storage and
//! memory are equal whenever a mutating call returns.
//!
//! ## Ownership policy
//!
//! Every mutating operation takes the acting user's id. A mismatch (or an
//! unknown playlist id) is a silent no-op rather than an error, so that the
//! existence of other users' playlists never leaks through error messages.
//! Internally the distinction is kept as an [`AccessDenied`] outcome and
//! discarded at the public surface.
//!
//! ## Concurrency
//!
//! All operations serialize through one async mutex, which keeps the
//! read-modify-persist cycle atomic for true multi-threaded callers and
//! preserves the no-duplicate-track and ownership invariants.

use crate::error::{PlaylistError, Result};
use crate::models::{now_millis, Playlist};
use bridge_traits::storage::KeyValueStore;
use core_catalog::Track;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Fixed storage namespace for the playlist collection
pub const PLAYLISTS_KEY: &str = "app.playlists";

/// Why a mutation did not apply. Never surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessDenied {
    /// No playlist with the requested id
    Missing,
    /// Playlist exists but belongs to someone else
    ForeignOwner,
}

/// Resolve the playlist `id` for mutation by `owner_id`.
fn owned_index(
    items: &[Playlist],
    id: &str,
    owner_id: &str,
) -> std::result::Result<usize, AccessDenied> {
    match items.iter().position(|p| p.id == id) {
        None => Err(AccessDenied::Missing),
        Some(i) if items[i].owner_id != owner_id => Err(AccessDenied::ForeignOwner),
        Some(i) => Ok(i),
    }
}

/// Ownership-checked playlist collection with a durable mirror
pub struct PlaylistStore {
    store: Arc<dyn KeyValueStore>,
    items: Mutex<Vec<Playlist>>,
}

impl PlaylistStore {
    /// Create an empty store over the given durable namespace.
    ///
    /// Call [`hydrate`](Self::hydrate) afterwards to resume a previous
    /// session's collection.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            items: Mutex::new(Vec::new()),
        }
    }

    /// Reload the collection from storage, replacing it wholesale.
    ///
    /// A missing or unparseable stored value yields an empty collection; a
    /// corrupted mirror must never wedge startup.
    pub async fn hydrate(&self) -> Result<()> {
        let loaded = match self.store.get(PLAYLISTS_KEY).await? {
            Some(value) => match serde_json::from_value::<Vec<Playlist>>(value) {
                Ok(items) => items,
                Err(e) => {
                    warn!(error = %e, "Persisted playlists unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        debug!(count = loaded.len(), "Hydrated playlists");
        *self.items.lock().await = loaded;
        Ok(())
    }

    /// Create a playlist and insert it at the front of the collection
    /// (most-recently-created first).
    pub async fn create(&self, name: &str, owner_id: &str) -> Result<Playlist> {
        let playlist = Playlist::new(name, owner_id);

        let mut items = self.items.lock().await;
        items.insert(0, playlist.clone());
        self.persist(&items).await?;

        info!(playlist_id = %playlist.id, "Created playlist");
        Ok(playlist)
    }

    /// Rename an owned playlist. Silent no-op when missing or not owned.
    pub async fn rename(&self, id: &str, owner_id: &str, new_name: &str) -> Result<()> {
        let mut items = self.items.lock().await;

        match owned_index(&items, id, owner_id) {
            Ok(i) => {
                items[i].name = new_name.trim().to_string();
                items[i].updated_at = now_millis();
                self.persist(&items).await?;
            }
            Err(denied) => debug!(playlist_id = id, ?denied, "Rename skipped"),
        }
        Ok(())
    }

    /// Delete an owned playlist. Silent no-op when missing or not owned.
    pub async fn remove(&self, id: &str, owner_id: &str) -> Result<()> {
        let mut items = self.items.lock().await;

        match owned_index(&items, id, owner_id) {
            Ok(i) => {
                items.remove(i);
                self.persist(&items).await?;
                info!(playlist_id = id, "Removed playlist");
            }
            Err(denied) => debug!(playlist_id = id, ?denied, "Remove skipped"),
        }
        Ok(())
    }

    /// Append a track to an owned playlist.
    ///
    /// Adding is idempotent per track id: a track whose id is already a
    /// member leaves the playlist untouched, and nothing is persisted when
    /// no structural change occurred.
    pub async fn add_track(&self, id: &str, owner_id: &str, track: Track) -> Result<()> {
        let mut items = self.items.lock().await;

        match owned_index(&items, id, owner_id) {
            Ok(i) => {
                if items[i].contains_track(&track.id) {
                    debug!(playlist_id = id, track_id = %track.id, "Track already present");
                    return Ok(());
                }
                items[i].tracks.push(track);
                items[i].updated_at = now_millis();
                self.persist(&items).await?;
            }
            Err(denied) => debug!(playlist_id = id, ?denied, "Add track skipped"),
        }
        Ok(())
    }

    /// Remove a track from an owned playlist by track id.
    pub async fn remove_track(&self, id: &str, owner_id: &str, track_id: &str) -> Result<()> {
        let mut items = self.items.lock().await;

        match owned_index(&items, id, owner_id) {
            Ok(i) => {
                let before = items[i].tracks.len();
                items[i].tracks.retain(|t| t.id != track_id);
                if items[i].tracks.len() != before {
                    items[i].updated_at = now_millis();
                    self.persist(&items).await?;
                }
            }
            Err(denied) => debug!(playlist_id = id, ?denied, "Remove track skipped"),
        }
        Ok(())
    }

    /// Snapshot of the whole collection, most-recently-created first.
    pub async fn playlists(&self) -> Vec<Playlist> {
        self.items.lock().await.clone()
    }

    /// Snapshot of one user's playlists.
    pub async fn playlists_for(&self, owner_id: &str) -> Vec<Playlist> {
        self.items
            .lock()
            .await
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect()
    }

    /// Look up a single playlist by id.
    pub async fn get(&self, id: &str) -> Option<Playlist> {
        self.items.lock().await.iter().find(|p| p.id == id).cloned()
    }

    /// Serialize the collection into the durable mirror.
    async fn persist(&self, items: &[Playlist]) -> Result<()> {
        let value =
            serde_json::to_value(items).map_err(|e| PlaylistError::Encode(e.to_string()))?;
        self.store.set(PLAYLISTS_KEY, value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_index_distinguishes_missing_from_foreign() {
        let items = vec![Playlist::new("Mix", "u-1")];
        let id = items[0].id.clone();

        assert!(owned_index(&items, &id, "u-1").is_ok());
        assert_eq!(
            owned_index(&items, &id, "u-2"),
            Err(AccessDenied::ForeignOwner)
        );
        assert_eq!(
            owned_index(&items, "nope", "u-1"),
            Err(AccessDenied::Missing)
        );
    }
}

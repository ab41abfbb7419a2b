//! Playlist domain model.

use core_catalog::Track;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, owned, ordered collection of tracks
///
/// `owner_id` identifies the creating user and never changes afterwards.
/// `tracks` preserves insertion order and holds no two entries with the same
/// track id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub tracks: Vec<Track>,
    /// UTC milliseconds
    pub created_at: i64,
    /// UTC milliseconds, refreshed on every mutation
    pub updated_at: i64,
}

impl Playlist {
    /// Create an empty playlist owned by `owner_id`.
    ///
    /// The name is trimmed; rejecting empty names is the caller boundary's
    /// job, not this constructor's.
    pub fn new(name: &str, owner_id: &str) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            owner_id: owner_id.to_string(),
            tracks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a track with this id is already a member.
    pub fn contains_track(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == track_id)
    }
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

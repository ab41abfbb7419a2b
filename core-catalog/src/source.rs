//! Catalog lookup contract consumed by the search and aggregation layers.

use crate::error::Result;
use crate::models::Track;
use async_trait::async_trait;

/// Catalog lookup operations
///
/// Every query returns a sequence of tracks, never null: "entity not found"
/// on the remote side is normalized to an empty list at this boundary, while
/// transport failures propagate as errors.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// The remote "top tracks for artist" list.
    ///
    /// Empty when the artist is unknown to the catalog.
    async fn top_tracks_by_artist(&self, artist: &str) -> Result<Vec<Track>>;

    /// Direct title search.
    async fn search_by_title(&self, title: &str) -> Result<Vec<Track>>;

    /// Combined artist + title filter.
    async fn search_by_artist_and_title(&self, artist: &str, title: &str)
        -> Result<Vec<Track>>;

    /// Artist names matching a free-text term, in catalog order.
    ///
    /// Feeds the search fallback chain's candidate step.
    async fn search_artists(&self, term: &str) -> Result<Vec<String>>;

    /// The global most-loved list.
    ///
    /// Implementations attempt a primary source and one documented fallback
    /// source before giving up and returning empty.
    async fn most_loved(&self) -> Result<Vec<Track>>;
}

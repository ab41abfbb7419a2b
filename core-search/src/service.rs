//! Search orchestration.
//!
//! Issues the catalog calls behind each UI search action, runs them through
//! the aggregation algorithms, and commits the outcome into the query/result
//! state. Fetches with no data dependency run concurrently; dependent steps
//! run in sequence. Cancellation is cooperative: a superseding request does
//! not abort in-flight calls, it only wins the right to commit.

use crate::aggregate::{self, FEED_LIMIT};
use crate::error::Result;
use crate::state::{Query, SearchSnapshot, SearchState};
use core_catalog::{CatalogSource, Track};
use futures::future::try_join_all;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Candidate-artist cap for the search fallback chain
pub const MAX_ARTIST_CANDIDATES: usize = 3;

/// Artist cap for the homepage feed
pub const HOME_ARTIST_LIMIT: usize = 4;

/// Orchestrates catalog queries and owns the query/result state
pub struct SearchService {
    catalog: Arc<dyn CatalogSource>,
    state: SearchState,
}

impl SearchService {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            state: SearchState::new(),
        }
    }

    /// Current query/result snapshot.
    pub async fn snapshot(&self) -> SearchSnapshot {
        self.state.snapshot().await
    }

    /// Watch-channel receiver for UI observation.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.state.subscribe()
    }

    /// Drop the current results without issuing a request.
    pub async fn clear_results(&self) {
        self.state.clear_results().await;
    }

    /// An artist's top ten, completed from the most-loved pool when the
    /// artist's own list runs short.
    pub async fn top10_by_artist(&self, artist: &str) -> Result<Vec<Track>> {
        let artist = artist.trim().to_string();
        let generation = self
            .state
            .begin(Query {
                artist: Some(artist.clone()),
                ..Default::default()
            })
            .await;

        let outcome = self.fetch_top10(&artist).await;
        self.finish(generation, outcome).await
    }

    /// Free-text search; an explicit artist narrows to one combined lookup,
    /// otherwise the fallback chain runs.
    pub async fn search(&self, term: &str, artist: Option<&str>) -> Result<Vec<Track>> {
        let term = term.trim().to_string();
        let artist = artist.map(str::trim).filter(|a| !a.is_empty());

        let generation = self
            .state
            .begin(Query {
                title: Some(term.clone()),
                artist: artist.map(str::to_string),
                ..Default::default()
            })
            .await;

        let outcome = match artist {
            Some(artist) => self
                .catalog
                .search_by_artist_and_title(artist, &term)
                .await
                .map_err(Into::into),
            None => self.search_fallback(&term).await,
        };
        self.finish(generation, outcome).await
    }

    /// The global most-loved listing.
    pub async fn most_loved(&self) -> Result<Vec<Track>> {
        let generation = self.state.begin(Query::default()).await;
        let outcome = self.catalog.most_loved().await.map_err(Into::into);
        self.finish(generation, outcome).await
    }

    /// Homepage feed: the given artists' top lists, fetched concurrently and
    /// interleaved round-robin into one bounded listing.
    pub async fn home_feed(&self, artists: &[String]) -> Result<Vec<Track>> {
        let artists: Vec<&str> = artists
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .take(HOME_ARTIST_LIMIT)
            .collect();

        let generation = self.state.begin(Query::default()).await;

        let fetches = artists
            .iter()
            .map(|artist| self.catalog.top_tracks_by_artist(artist));
        let outcome = try_join_all(fetches)
            .await
            .map(|lists| aggregate::interleave_round_robin(&lists))
            .map_err(Into::into);

        self.finish(generation, outcome).await
    }

    /// Commit or record the outcome, then hand the tracks back to the caller.
    ///
    /// A superseded request still returns its own data; it just loses the
    /// right to write the shared state.
    async fn finish(&self, generation: u64, outcome: Result<Vec<Track>>) -> Result<Vec<Track>> {
        match outcome {
            Ok(tracks) => {
                self.state.commit(generation, tracks.clone()).await;
                Ok(tracks)
            }
            Err(e) => {
                self.state.fail(generation, e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn fetch_top10(&self, artist: &str) -> Result<Vec<Track>> {
        if artist.is_empty() {
            return Ok(Vec::new());
        }

        let primary = self.catalog.top_tracks_by_artist(artist).await?;

        // The pool is only worth fetching when the primary list runs short.
        if primary.len() >= FEED_LIMIT {
            return Ok(aggregate::top_tracks_with_completion(primary, &[]));
        }

        let pool = self.catalog.most_loved().await?;
        Ok(aggregate::top_tracks_with_completion(primary, &pool))
    }

    /// The three-step fallback chain; short-circuits at the first non-empty
    /// step.
    async fn search_fallback(&self, term: &str) -> Result<Vec<Track>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }

        // 1) direct title search
        let by_title = self.catalog.search_by_title(term).await?;
        if !by_title.is_empty() {
            return Ok(by_title);
        }

        // 2) candidate artists, combined artist+title per candidate
        let candidates: Vec<String> = self
            .catalog
            .search_artists(term)
            .await?
            .into_iter()
            .take(MAX_ARTIST_CANDIDATES)
            .collect();

        if !candidates.is_empty() {
            let fetches = candidates
                .iter()
                .map(|artist| self.catalog.search_by_artist_and_title(artist, term));
            let per_artist = try_join_all(fetches).await?;

            let collected = aggregate::merge_dedup(per_artist);
            if !collected.is_empty() {
                debug!(
                    term = term,
                    candidates = candidates.len(),
                    count = collected.len(),
                    "Search resolved through artist candidates"
                );
                return Ok(collected);
            }
        }

        // 3) treat the term itself as an artist name
        debug!(term = term, "Search falling back to term-as-artist");
        self.fetch_top10(term).await
    }
}

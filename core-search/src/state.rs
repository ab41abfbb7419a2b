//! Query/result state machine.
//!
//! Three phases: `Idle` (no request in flight, last result stands),
//! `Loading` (request in flight; previous result and error are cleared the
//! moment loading begins), `Error` (last request failed).
//!
//! ## Stale-response suppression
//!
//! Each issued request bumps a monotonically increasing generation counter
//! and captures its value. A completion commits only while its captured
//! generation still equals the current one, so a superseded request can
//! never write into the result set.

use core_catalog::Track;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};
use tracing::debug;

/// Last-issued search parameters, retained for UI redisplay.
///
/// Purely descriptive; aggregation never reads it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
}

/// Request lifecycle phase
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// Observable snapshot of the current query, phase, and result set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    pub query: Query,
    pub phase: SearchPhase,
    pub results: Vec<Track>,
}

impl SearchSnapshot {
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}

struct Inner {
    generation: u64,
    snapshot: SearchSnapshot,
}

/// Shared query/result state with watch-channel observation
pub struct SearchState {
    inner: Mutex<Inner>,
    tx: watch::Sender<SearchSnapshot>,
}

impl SearchState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SearchSnapshot::default());
        Self {
            inner: Mutex::new(Inner {
                generation: 0,
                snapshot: SearchSnapshot::default(),
            }),
            tx,
        }
    }

    /// Enter `Loading` for a new request and return its generation.
    ///
    /// Clears the previous results and error, records the descriptive
    /// query, and supersedes any request still in flight.
    pub async fn begin(&self, query: Query) -> u64 {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.snapshot.query = query;
        inner.snapshot.phase = SearchPhase::Loading;
        inner.snapshot.results.clear();
        self.tx.send_replace(inner.snapshot.clone());
        inner.generation
    }

    /// Commit a successful completion. Returns `false` when the request was
    /// superseded and the result was discarded.
    pub async fn commit(&self, generation: u64, results: Vec<Track>) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(
                generation,
                current = inner.generation,
                "Discarding stale result"
            );
            return false;
        }
        inner.snapshot.phase = SearchPhase::Idle;
        inner.snapshot.results = results;
        self.tx.send_replace(inner.snapshot.clone());
        true
    }

    /// Record a failed completion. Returns `false` when superseded.
    pub async fn fail(&self, generation: u64, message: String) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(
                generation,
                current = inner.generation,
                "Discarding stale failure"
            );
            return false;
        }
        inner.snapshot.phase = SearchPhase::Error(message);
        self.tx.send_replace(inner.snapshot.clone());
        true
    }

    /// Drop the current results and error without issuing a request.
    pub async fn clear_results(&self) {
        let mut inner = self.inner.lock().await;
        inner.snapshot.results.clear();
        inner.snapshot.phase = SearchPhase::Idle;
        self.tx.send_replace(inner.snapshot.clone());
    }

    pub async fn snapshot(&self) -> SearchSnapshot {
        self.inner.lock().await.snapshot.clone()
    }

    /// Watch-channel receiver for UI observation.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track::new(id, "Title", "Artist")
    }

    #[tokio::test]
    async fn test_begin_clears_previous_results_and_error() {
        let state = SearchState::new();

        let g1 = state.begin(Query::default()).await;
        state.commit(g1, vec![track("t1")]).await;

        let g2 = state
            .begin(Query {
                title: Some("new".into()),
                ..Default::default()
            })
            .await;

        let snapshot = state.snapshot().await;
        assert!(snapshot.is_loading());
        assert!(snapshot.results.is_empty());
        assert_eq!(snapshot.query.title.as_deref(), Some("new"));
        assert!(g2 > g1);
    }

    #[tokio::test]
    async fn test_commit_transitions_to_idle_with_results() {
        let state = SearchState::new();
        let generation = state.begin(Query::default()).await;

        assert!(state.commit(generation, vec![track("t1")]).await);

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.phase, SearchPhase::Idle);
        assert_eq!(snapshot.results.len(), 1);
    }

    #[tokio::test]
    async fn test_stale_commit_is_discarded() {
        let state = SearchState::new();

        let old = state.begin(Query::default()).await;
        let new = state.begin(Query::default()).await;

        assert!(!state.commit(old, vec![track("stale")]).await);
        assert!(state.commit(new, vec![track("fresh")]).await);

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.results[0].id, "fresh");
    }

    #[tokio::test]
    async fn test_stale_failure_is_discarded() {
        let state = SearchState::new();

        let old = state.begin(Query::default()).await;
        let new = state.begin(Query::default()).await;

        assert!(!state.fail(old, "boom".into()).await);
        assert!(state.commit(new, vec![track("t1")]).await);

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.phase, SearchPhase::Idle);
    }

    #[tokio::test]
    async fn test_fail_keeps_error_message() {
        let state = SearchState::new();
        let generation = state.begin(Query::default()).await;

        assert!(state.fail(generation, "timeout".into()).await);

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.error(), Some("timeout"));
        assert!(snapshot.results.is_empty());
    }

    #[tokio::test]
    async fn test_empty_commit_is_success_not_error() {
        let state = SearchState::new();
        let generation = state.begin(Query::default()).await;

        assert!(state.commit(generation, Vec::new()).await);

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.phase, SearchPhase::Idle);
        assert!(snapshot.error().is_none());
    }

    #[tokio::test]
    async fn test_clear_results() {
        let state = SearchState::new();
        let generation = state.begin(Query::default()).await;
        state.fail(generation, "boom".into()).await;

        state.clear_results().await;

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.phase, SearchPhase::Idle);
        assert!(snapshot.results.is_empty());
    }

    #[tokio::test]
    async fn test_watch_observes_transitions() {
        let state = SearchState::new();
        let mut rx = state.subscribe();

        let generation = state.begin(Query::default()).await;
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_loading());

        state.commit(generation, vec![track("t1")]).await;
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().results.len(), 1);
    }
}

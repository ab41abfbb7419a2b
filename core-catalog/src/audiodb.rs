//! TheAudioDB API Client
//!
//! Implements [`CatalogSource`] over the TheAudioDB JSON API.
//!
//! ## API Endpoints
//!
//! - **Top tracks**: `track-top10.php?s={artist}`
//! - **Title search**: `searchtrack.php?t={title}`
//! - **Combined search**: `searchtrack.php?s={artist}&t={title}`
//! - **Artist search**: `search.php?s={term}`
//! - **Most loved**: `mostloved.php?format=track`
//!
//! ## Not-found handling
//!
//! The API reports unknown entities with HTTP 404 or with a `null` list in
//! an otherwise valid payload. Both are normalized to an empty track list;
//! only genuine transport failures and non-404 error statuses surface as
//! errors.
//!
//! ## Most-loved fallback
//!
//! The most-loved listing is flaky on the default API key. When the primary
//! base yields an empty list, one request against the public key-1 base is
//! attempted before giving up; failures of that second attempt are swallowed
//! and the list stays empty.

use crate::error::{CatalogError, Result};
use crate::models::Track;
use crate::source::CatalogSource;
use async_trait::async_trait;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Primary API base (default key)
pub const AUDIODB_API_BASE: &str = "https://www.theaudiodb.com/api/v1/json/2";

/// Fallback base for the most-loved listing (public key 1)
pub const AUDIODB_FALLBACK_BASE: &str = "https://www.theaudiodb.com/api/v1/json/1";

/// Timeout for API requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// TheAudioDB catalog client
pub struct AudioDbClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    fallback_url: String,
}

impl AudioDbClient {
    /// Create a client against the default API bases.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self::with_base_urls(http_client, AUDIODB_API_BASE, AUDIODB_FALLBACK_BASE)
    }

    /// Create a client against custom bases (configuration / test servers).
    ///
    /// Trailing slashes are stripped so path joining stays predictable.
    pub fn with_base_urls(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        fallback_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            fallback_url: fallback_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Issue a GET and parse the JSON payload.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` - parsed payload
    /// - `Ok(None)` - remote reported not-found (HTTP 404)
    /// - `Err` - transport failure, non-404 error status, or unparseable body
    async fn get_json(
        &self,
        base: &str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        let mut url = format!("{}/{}", base, path);
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url = format!("{}?{}", url, query);
        }

        debug!(url = %url, "Querying catalog");

        let request = HttpRequest::new(HttpMethod::Get, url)
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT);

        let response = self.http_client.execute(request).await?;

        if response.status == 404 {
            debug!(path = path, "Catalog entity not found");
            return Ok(None);
        }

        if !response.is_success() {
            return Err(CatalogError::Http {
                status: response.status,
            });
        }

        let value = serde_json::from_slice(&response.body)
            .map_err(|e| CatalogError::Json(e.to_string()))?;

        Ok(Some(value))
    }

    async fn most_loved_from(&self, base: &str) -> Result<Vec<Track>> {
        let payload = self
            .get_json(base, "mostloved.php", &[("format", "track")])
            .await?;
        Ok(tracks_under(payload.as_ref(), &["loved", "track"]))
    }
}

/// Extract tracks from the first list-valued key present in the payload.
///
/// `null` lists and missing keys mean "no results".
fn tracks_under(payload: Option<&Value>, keys: &[&str]) -> Vec<Track> {
    let Some(payload) = payload else {
        return Vec::new();
    };

    keys.iter()
        .find_map(|k| payload.get(*k).and_then(Value::as_array))
        .map(|list| list.iter().map(Track::from_raw).collect())
        .unwrap_or_default()
}

#[async_trait]
impl CatalogSource for AudioDbClient {
    async fn top_tracks_by_artist(&self, artist: &str) -> Result<Vec<Track>> {
        let artist = artist.trim();
        if artist.is_empty() {
            return Ok(Vec::new());
        }

        let payload = self
            .get_json(&self.base_url, "track-top10.php", &[("s", artist)])
            .await?;
        let tracks = tracks_under(payload.as_ref(), &["track", "tracks"]);

        debug!(artist = artist, count = tracks.len(), "Fetched top tracks");
        Ok(tracks)
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Track>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(Vec::new());
        }

        let payload = self
            .get_json(&self.base_url, "searchtrack.php", &[("t", title)])
            .await?;
        Ok(tracks_under(payload.as_ref(), &["track"]))
    }

    async fn search_by_artist_and_title(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Vec<Track>> {
        let (artist, title) = (artist.trim(), title.trim());
        if artist.is_empty() || title.is_empty() {
            return Ok(Vec::new());
        }

        let payload = self
            .get_json(
                &self.base_url,
                "searchtrack.php",
                &[("s", artist), ("t", title)],
            )
            .await?;
        Ok(tracks_under(payload.as_ref(), &["track"]))
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<String>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let payload = self
            .get_json(&self.base_url, "search.php", &[("s", term)])
            .await?;

        let names = payload
            .as_ref()
            .and_then(|p| p.get("artists"))
            .and_then(Value::as_array)
            .map(|artists| {
                artists
                    .iter()
                    // entries without a usable name are skipped
                    .filter_map(|a| a.get("strArtist").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(names)
    }

    async fn most_loved(&self) -> Result<Vec<Track>> {
        let mut tracks = self.most_loved_from(&self.base_url).await?;

        if tracks.is_empty() {
            // The fallback is best-effort: a failure here keeps the list empty.
            match self.most_loved_from(&self.fallback_url).await {
                Ok(fallback_tracks) => tracks = fallback_tracks,
                Err(e) => {
                    warn!(error = %e, "Most-loved fallback source failed");
                }
            }
        }

        debug!(count = tracks.len(), "Fetched most-loved tracks");
        Ok(tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        Http {}

        #[async_trait]
        impl HttpClient for Http {
            async fn execute(
                &self,
                request: HttpRequest,
            ) -> bridge_traits::error::Result<HttpResponse>;
        }
    }

    use bridge_traits::http::HttpResponse;

    fn ok_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    fn status_response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    fn client(mock: MockHttp) -> AudioDbClient {
        AudioDbClient::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_top_tracks_parses_payload() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .withf(|req| req.url.contains("track-top10.php?s=Queen"))
            .times(1)
            .returning(|_| {
                Ok(ok_response(
                    r#"{"track": [
                        {"idTrack": "t1", "strTrack": "One", "strArtist": "Queen"},
                        {"idTrack": "t2", "strTrack": "Two", "strArtist": "Queen"}
                    ]}"#,
                ))
            });

        let tracks = client(http).top_tracks_by_artist("Queen").await.unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, "t1");
        assert_eq!(tracks[1].title, "Two");
    }

    #[tokio::test]
    async fn test_not_found_is_empty_not_error() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .returning(|_| Ok(status_response(404)));

        let tracks = client(http).top_tracks_by_artist("Nobody").await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_null_track_list_is_empty() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .returning(|_| Ok(ok_response(r#"{"track": null}"#)));

        let tracks = client(http).search_by_title("nothing").await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .returning(|_| Ok(status_response(503)));

        let result = client(http).search_by_title("anything").await;
        assert!(matches!(result, Err(CatalogError::Http { status: 503 })));
    }

    #[tokio::test]
    async fn test_blank_term_short_circuits_without_network() {
        let mut http = MockHttp::new();
        http.expect_execute().times(0);

        let client = client(http);
        assert!(client.top_tracks_by_artist("   ").await.unwrap().is_empty());
        assert!(client.search_by_title("").await.unwrap().is_empty());
        assert!(client
            .search_by_artist_and_title("Queen", " ")
            .await
            .unwrap()
            .is_empty());
        assert!(client.search_artists("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_artists_skips_unnamed_entries() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .withf(|req| req.url.contains("search.php?s=queen"))
            .times(1)
            .returning(|_| {
                Ok(ok_response(
                    r#"{"artists": [
                        {"strArtist": "Queen"},
                        {"idArtist": "2"},
                        {"strArtist": "Queens of the Stone Age"}
                    ]}"#,
                ))
            });

        let names = client(http).search_artists("queen").await.unwrap();
        assert_eq!(names, vec!["Queen", "Queens of the Stone Age"]);
    }

    #[tokio::test]
    async fn test_most_loved_uses_fallback_when_primary_empty() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .withf(|req| req.url.starts_with(AUDIODB_API_BASE))
            .times(1)
            .returning(|_| Ok(ok_response(r#"{"loved": null}"#)));
        http.expect_execute()
            .withf(|req| req.url.starts_with(AUDIODB_FALLBACK_BASE))
            .times(1)
            .returning(|_| {
                Ok(ok_response(
                    r#"{"loved": [{"idTrack": "l1", "strTrack": "Loved", "strArtist": "A"}]}"#,
                ))
            });

        let tracks = client(http).most_loved().await.unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "l1");
    }

    #[tokio::test]
    async fn test_most_loved_fallback_failure_is_swallowed() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .withf(|req| req.url.starts_with(AUDIODB_API_BASE))
            .times(1)
            .returning(|_| Ok(ok_response(r#"{}"#)));
        http.expect_execute()
            .withf(|req| req.url.starts_with(AUDIODB_FALLBACK_BASE))
            .times(1)
            .returning(|_| Ok(status_response(500)));

        let tracks = client(http).most_loved().await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_most_loved_accepts_track_key() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .returning(|_| {
                Ok(ok_response(
                    r#"{"track": [{"idTrack": "m1", "strTrack": "Hit", "strArtist": "B"}]}"#,
                ))
            });

        let tracks = client(http).most_loved().await.unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Hit");
    }

    #[tokio::test]
    async fn test_query_term_is_percent_encoded() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .withf(|req| req.url.contains("s=The%20Beatles"))
            .times(1)
            .returning(|_| Ok(ok_response(r#"{"track": []}"#)));

        let tracks = client(http)
            .top_tracks_by_artist("The Beatles")
            .await
            .unwrap();
        assert!(tracks.is_empty());
    }
}

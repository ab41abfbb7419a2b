//! Canonical track model and raw-record normalization.
//!
//! Remote records arrive as untyped JSON with several aliasing schemes for
//! the same logical field. Normalization is total: it always produces a
//! [`Track`], filling required fields with a placeholder and backfilling a
//! missing identifier with a freshly generated unique string so downstream
//! deduplication stays valid.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Placeholder for required fields the source omits
pub const MISSING_FIELD: &str = "—";

/// Release year as the catalog reports it: sometimes a string, sometimes a
/// bare number. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Text(String),
    Number(i64),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Text(s) => write!(f, "{}", s),
            Year::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Canonical representation of one catalog entry
///
/// `id` is the deduplication key: stable per track, assigned once, never
/// rewritten after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl Track {
    /// Build a track with just the required fields (handy in tests and
    /// fixtures; optional metadata stays empty).
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            genre: None,
            year: None,
            album: None,
            thumb_url: None,
            preview_url: None,
        }
    }

    /// Normalize one raw catalog record.
    ///
    /// Field aliases, in priority order:
    /// - id: `idTrack`, `id` (numbers coerced to strings)
    /// - title: `strTrack`, `trackName`
    /// - artist: `strArtist`, `artistName`
    /// - genre: `strGenre`
    /// - year: `intYearReleased`, `yearReleased`
    /// - album: `strAlbum`, `collectionName`
    /// - thumbnail: `strTrackThumb`
    /// - preview: `strMusicVid`
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: id_field(raw, &["idTrack", "id"])
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: str_field(raw, &["strTrack", "trackName"])
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            artist: str_field(raw, &["strArtist", "artistName"])
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            genre: str_field(raw, &["strGenre"]),
            year: year_field(raw, &["intYearReleased", "yearReleased"]),
            album: str_field(raw, &["strAlbum", "collectionName"]),
            thumb_url: str_field(raw, &["strTrackThumb"]),
            preview_url: str_field(raw, &["strMusicVid"]),
        }
    }
}

/// First string value found under any of `keys`; `null` and absent keys fall
/// through to the next alias.
fn str_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| raw.get(*k).and_then(Value::as_str).map(str::to_string))
}

/// Like [`str_field`], but coerces numeric identifiers to strings.
fn id_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match raw.get(*k) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Year is passed through in whichever shape the source used.
fn year_field(raw: &Value, keys: &[&str]) -> Option<Year> {
    keys.iter().find_map(|k| match raw.get(*k) {
        Some(Value::String(s)) => Some(Year::Text(s.clone())),
        Some(Value::Number(n)) => n.as_i64().map(Year::Number),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_audiodb_aliases() {
        let raw = json!({
            "idTrack": "32793500",
            "strTrack": "Bohemian Rhapsody",
            "strArtist": "Queen",
            "strGenre": "Rock",
            "intYearReleased": "1975",
            "strAlbum": "A Night at the Opera",
            "strTrackThumb": "https://example.com/thumb.jpg",
            "strMusicVid": "https://example.com/vid"
        });

        let track = Track::from_raw(&raw);
        assert_eq!(track.id, "32793500");
        assert_eq!(track.title, "Bohemian Rhapsody");
        assert_eq!(track.artist, "Queen");
        assert_eq!(track.genre.as_deref(), Some("Rock"));
        assert_eq!(track.year, Some(Year::Text("1975".to_string())));
        assert_eq!(track.album.as_deref(), Some("A Night at the Opera"));
        assert_eq!(track.thumb_url.as_deref(), Some("https://example.com/thumb.jpg"));
        assert_eq!(track.preview_url.as_deref(), Some("https://example.com/vid"));
    }

    #[test]
    fn test_from_raw_alternate_aliases() {
        let raw = json!({
            "id": 42,
            "trackName": "Yesterday",
            "artistName": "The Beatles",
            "yearReleased": 1965,
            "collectionName": "Help!"
        });

        let track = Track::from_raw(&raw);
        assert_eq!(track.id, "42");
        assert_eq!(track.title, "Yesterday");
        assert_eq!(track.artist, "The Beatles");
        assert_eq!(track.year, Some(Year::Number(1965)));
        assert_eq!(track.album.as_deref(), Some("Help!"));
    }

    #[test]
    fn test_from_raw_missing_required_fields_get_placeholder() {
        let track = Track::from_raw(&json!({ "idTrack": "1" }));
        assert_eq!(track.title, MISSING_FIELD);
        assert_eq!(track.artist, MISSING_FIELD);
        assert_eq!(track.genre, None);
        assert_eq!(track.year, None);
    }

    #[test]
    fn test_from_raw_missing_id_is_backfilled_and_unique() {
        let a = Track::from_raw(&json!({ "strTrack": "Untitled" }));
        let b = Track::from_raw(&json!({ "strTrack": "Untitled" }));
        assert!(!a.id.is_empty());
        assert!(!b.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_from_raw_null_falls_through_to_alias() {
        let raw = json!({
            "strTrack": null,
            "trackName": "Fallback Title",
            "strArtist": "Adele"
        });

        let track = Track::from_raw(&raw);
        assert_eq!(track.title, "Fallback Title");
    }

    #[test]
    fn test_year_serde_passthrough() {
        let text: Track = serde_json::from_value(json!({
            "id": "1", "title": "t", "artist": "a", "year": "1999"
        }))
        .unwrap();
        assert_eq!(text.year, Some(Year::Text("1999".to_string())));

        let num: Track = serde_json::from_value(json!({
            "id": "1", "title": "t", "artist": "a", "year": 1999
        }))
        .unwrap();
        assert_eq!(num.year, Some(Year::Number(1999)));

        // Round-trips in the same shape it came in
        assert_eq!(serde_json::to_value(&num).unwrap()["year"], json!(1999));
    }
}

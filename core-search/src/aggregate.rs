//! Aggregation algorithms.
//!
//! Pure, deterministic functions over already-fetched track sequences; no
//! network calls happen here. All outputs are bounded to [`FEED_LIMIT`]
//! entries and contain no duplicate track ids.

use core_catalog::Track;
use std::collections::HashSet;

/// Upper bound for every aggregated listing
pub const FEED_LIMIT: usize = 10;

/// Extend a primary list from a supplementary pool up to [`FEED_LIMIT`].
///
/// The primary list comes through verbatim and first; pool entries whose id
/// already appears are skipped; the result is truncated to the limit.
pub fn top_tracks_with_completion(primary: Vec<Track>, pool: &[Track]) -> Vec<Track> {
    let mut out = primary;
    let mut seen: HashSet<String> = out.iter().map(|t| t.id.clone()).collect();

    for track in pool {
        if out.len() >= FEED_LIMIT {
            break;
        }
        if seen.insert(track.id.clone()) {
            out.push(track.clone());
        }
    }

    out.truncate(FEED_LIMIT);
    out
}

/// Round-robin interleave of N independent lists, deduplicated by id.
///
/// Index 0 of each list in list order, then index 1, and so on, until the
/// limit is reached or every list is exhausted. If the interleave produced
/// fewer than the limit, each list is then scanned start-to-end to backfill.
pub fn interleave_round_robin(lists: &[Vec<Track>]) -> Vec<Track> {
    let mut out: Vec<Track> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let longest = lists.iter().map(Vec::len).max().unwrap_or(0);

    'rounds: for i in 0..longest {
        for list in lists {
            if out.len() >= FEED_LIMIT {
                break 'rounds;
            }
            let Some(track) = list.get(i) else { continue };
            if seen.insert(track.id.clone()) {
                out.push(track.clone());
            }
        }
    }

    if out.len() < FEED_LIMIT {
        'backfill: for list in lists {
            for track in list {
                if out.len() >= FEED_LIMIT {
                    break 'backfill;
                }
                if seen.insert(track.id.clone()) {
                    out.push(track.clone());
                }
            }
        }
    }

    out.truncate(FEED_LIMIT);
    out
}

/// Concatenate lists, keeping only the first occurrence of each id.
///
/// Order is first-seen across the lists in their given order; no length
/// bound is applied.
pub fn merge_dedup<I>(lists: I) -> Vec<Track>
where
    I: IntoIterator<Item = Vec<Track>>,
{
    let mut out: Vec<Track> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for list in lists {
        for track in list {
            if seen.insert(track.id.clone()) {
                out.push(track);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track::new(id, format!("Title {}", id), "Artist")
    }

    fn tracks(ids: &[&str]) -> Vec<Track> {
        ids.iter().map(|id| track(id)).collect()
    }

    fn ids(list: &[Track]) -> Vec<&str> {
        list.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_completion_fills_from_pool_without_duplicates() {
        // Primary [t1, t2]; pool starts with t2 which must be skipped
        let primary = tracks(&["t1", "t2"]);
        let pool = tracks(&[
            "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9", "t10", "t11",
        ]);

        let out = top_tracks_with_completion(primary, &pool);
        assert_eq!(
            ids(&out),
            ["t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9", "t10"]
        );
    }

    #[test]
    fn test_completion_length_law() {
        // |A| + |new ids in B| below the limit
        let out = top_tracks_with_completion(tracks(&["a", "b"]), &tracks(&["b", "c"]));
        assert_eq!(ids(&out), ["a", "b", "c"]);

        // Pool exhausted before the limit
        let out = top_tracks_with_completion(tracks(&["a"]), &[]);
        assert_eq!(ids(&out), ["a"]);
    }

    #[test]
    fn test_completion_truncates_oversized_primary() {
        let primary = tracks(&[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
        ]);
        let out = top_tracks_with_completion(primary, &tracks(&["x"]));
        assert_eq!(out.len(), FEED_LIMIT);
        assert_eq!(out[9].id, "j");
    }

    #[test]
    fn test_completion_preserves_primary_order_and_pool_order() {
        let out = top_tracks_with_completion(
            tracks(&["z", "a"]),
            &tracks(&["m", "k", "a"]),
        );
        assert_eq!(ids(&out), ["z", "a", "m", "k"]);
    }

    #[test]
    fn test_interleave_round_robin_order() {
        let lists = vec![
            tracks(&["a1", "a2"]),
            tracks(&["b1", "b2"]),
            tracks(&["c1"]),
        ];

        let out = interleave_round_robin(&lists);
        assert_eq!(ids(&out), ["a1", "b1", "c1", "a2", "b2"]);
    }

    #[test]
    fn test_interleave_skips_already_emitted_ids() {
        let lists = vec![tracks(&["x", "a2"]), tracks(&["x", "b2"])];

        let out = interleave_round_robin(&lists);
        assert_eq!(ids(&out), ["x", "a2", "b2"]);
    }

    #[test]
    fn test_interleave_bounded_to_limit() {
        let lists = vec![
            tracks(&["a1", "a2", "a3", "a4", "a5", "a6"]),
            tracks(&["b1", "b2", "b3", "b4", "b5", "b6"]),
        ];

        let out = interleave_round_robin(&lists);
        assert_eq!(out.len(), FEED_LIMIT);
        // Strict alternation until the cut
        assert_eq!(
            ids(&out),
            ["a1", "b1", "a2", "b2", "a3", "b3", "a4", "b4", "a5", "b5"]
        );
    }

    #[test]
    fn test_interleave_backfills_when_short() {
        // Round robin yields 3; backfill walks lists start-to-end
        let lists = vec![tracks(&["a1"]), tracks(&["b1", "b2", "b3", "b4"])];

        let out = interleave_round_robin(&lists);
        assert_eq!(ids(&out), ["a1", "b1", "b2", "b3", "b4"]);
    }

    #[test]
    fn test_interleave_empty_inputs() {
        assert!(interleave_round_robin(&[]).is_empty());
        assert!(interleave_round_robin(&[Vec::new(), Vec::new()]).is_empty());
    }

    #[test]
    fn test_merge_dedup_keeps_first_seen_order() {
        let merged = merge_dedup(vec![
            tracks(&["a", "b"]),
            tracks(&["b", "c"]),
            tracks(&["a", "d"]),
        ]);
        assert_eq!(ids(&merged), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_merge_dedup_is_unbounded() {
        let lists: Vec<Vec<Track>> = (0..3)
            .map(|i| (0..5).map(|j| track(&format!("t{}-{}", i, j))).collect())
            .collect();
        assert_eq!(merge_dedup(lists).len(), 15);
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Shown in place of a missing name or artist.
pub const UNKNOWN: &str = "-";

/// One entry of the catalog's `Tracks` dictionary, as decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub track_id: String,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub play_count: i64,
    pub last_played: Option<DateTime<Utc>>,
}

impl TrackRecord {
    /// A record with only an id; every other field takes its default.
    pub fn new(track_id: impl Into<String>) -> Self {
        Self {
            track_id: track_id.into(),
            name: None,
            artist: None,
            genre: None,
            play_count: 0,
            last_played: None,
        }
    }

    pub fn is_podcast(&self) -> bool {
        self.genre.as_deref() == Some("Podcast")
    }
}

/// The decoded track collection, in document order.
///
/// Kept as a sequence rather than a map so a repeated track id survives
/// decoding and shows up in [`crate::library::check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub tracks: Vec<TrackRecord>,
}

impl Catalog {
    pub fn new(tracks: Vec<TrackRecord>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Display summary of a kept track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeTuple {
    pub track_id: String,
    pub name: String,
    pub artist: String,
    pub play_count: i64,
    pub last_played: Option<DateTime<Utc>>,
}

/// Derived state of one indexing pass.
///
/// `by_index` and `resume` share exactly the same keys, `1..=len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    pub by_index: BTreeMap<usize, TrackRecord>,
    pub resume: BTreeMap<usize, ResumeTuple>,
    pub track_to_index: BTreeMap<String, Vec<usize>>,
    pub excluded: Vec<String>,
}

impl CatalogIndex {
    /// Number of kept tracks.
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    pub fn track(&self, idx: usize) -> Option<&TrackRecord> {
        self.by_index.get(&idx)
    }

    pub fn resume(&self, idx: usize) -> Option<&ResumeTuple> {
        self.resume.get(&idx)
    }

    /// Ordinals recorded for `track_id`, normally exactly one.
    pub fn indices_of(&self, track_id: &str) -> &[usize] {
        self.track_to_index
            .get(track_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

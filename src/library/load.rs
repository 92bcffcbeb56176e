use std::io::Cursor;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use plist::{Dictionary, Value};

use crate::error::LoadError;

use super::model::{Catalog, TrackRecord};

/// Read and decode the catalog at `path` (XML or binary property list).
pub fn read_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("[catalog] read {} bytes from {}", bytes.len(), path.display());

    let value = Value::from_reader(Cursor::new(bytes)).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_plist(&value)
}

impl Catalog {
    /// Convert a decoded property list into a catalog.
    ///
    /// A document without a `Tracks` key is an empty catalog.
    pub fn from_plist(value: &Value) -> Result<Self, LoadError> {
        let root = value
            .as_dictionary()
            .ok_or_else(|| LoadError::Malformed("top level is not a dictionary".into()))?;

        let Some(tracks) = root.get("Tracks") else {
            return Ok(Catalog::default());
        };
        let tracks = tracks
            .as_dictionary()
            .ok_or_else(|| LoadError::Malformed("`Tracks` is not a dictionary".into()))?;

        let mut records = Vec::with_capacity(tracks.len());
        for (track_id, info) in tracks {
            let info = info.as_dictionary().ok_or_else(|| {
                LoadError::Malformed(format!("track {track_id} is not a dictionary"))
            })?;
            records.push(track_from_dict(track_id, info));
        }
        Ok(Catalog::new(records))
    }
}

fn track_from_dict(track_id: &str, info: &Dictionary) -> TrackRecord {
    TrackRecord {
        track_id: track_id.to_string(),
        name: info.get("Name").and_then(text_of),
        artist: info.get("Artist").and_then(text_of),
        genre: info.get("Genre").and_then(text_of),
        play_count: info.get("Play Count").and_then(count_of).unwrap_or(0),
        last_played: info.get("Play Date UTC").and_then(date_of),
    }
}

// Scalars other than strings keep their textual form.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => i
            .as_signed()
            .map(|v| v.to_string())
            .or_else(|| i.as_unsigned().map(|v| v.to_string())),
        Value::Real(r) => Some(r.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

fn count_of(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => i
            .as_signed()
            .or_else(|| i.as_unsigned().map(|u| i64::try_from(u).unwrap_or(i64::MAX))),
        _ => None,
    }
}

fn date_of(value: &Value) -> Option<DateTime<Utc>> {
    value.as_date().map(|d| DateTime::<Utc>::from(SystemTime::from(d)))
}

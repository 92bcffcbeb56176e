//! Last-played timestamp helpers.
//!
//! Catalogs sometimes store the Unix epoch (or an instant shortly after it)
//! for tracks that were never played. Anything inside the first day after
//! the epoch, or before it, is treated exactly like a missing timestamp.

use std::fmt::Write;

use chrono::{DateTime, Utc};

const SENTINEL_WINDOW_SECS: i64 = 86_400;

/// Drop the "never played" sentinel, keeping real timestamps.
pub fn normalize(stamp: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    stamp.filter(|dt| dt.timestamp() >= SENTINEL_WINDOW_SECS)
}

/// Sort key for access ordering: the timestamp in seconds when there is a
/// real one, else the ordinal itself.
pub fn time_key(ordinal: usize, last_played: Option<DateTime<Utc>>) -> i64 {
    match normalize(last_played) {
        Some(dt) => dt.timestamp(),
        None => i64::try_from(ordinal).unwrap_or(i64::MAX),
    }
}

/// Render `stamp` with a strftime-style `fmt`; empty when absent.
///
/// An unusable format renders as an empty field rather than panicking;
/// settings are validated against this up front.
pub fn format_date(stamp: Option<DateTime<Utc>>, fmt: &str) -> String {
    let Some(dt) = stamp else {
        return String::new();
    };
    let mut out = String::new();
    if write!(out, "{}", dt.format(fmt)).is_err() {
        log::warn!("[time] cannot render date with format {fmt:?}");
        out.clear();
    }
    out
}

use crate::library::ResumeTuple;
use crate::library::time::format_date;

const SECONDARY_MAX: usize = 20;
const TRUNCATED_MARKER: &str = "[...]";

/// Render `tuple` labelled by its track id.
pub fn render(tuple: &ResumeTuple, date_format: &str) -> String {
    render_line(&tuple.track_id, tuple, date_format)
}

/// Render `tuple` as `<label> <date>. <name> / <artist>`.
///
/// The label is right-aligned to 9 columns and the date to 11. The artist
/// has `/` replaced by `~` and is cut to 20 characters; a field that
/// reaches 20 characters gets a `[...]` marker.
///
/// # Panics
///
/// When `tuple.play_count` is negative.
pub fn render_line(label: &str, tuple: &ResumeTuple, date_format: &str) -> String {
    assert!(
        tuple.play_count >= 0,
        "play count of track {} is negative ({})",
        tuple.track_id,
        tuple.play_count
    );

    let mut shown: String = tuple
        .artist
        .replace('/', "~")
        .chars()
        .take(SECONDARY_MAX)
        .collect();
    if shown.chars().count() >= SECONDARY_MAX {
        shown.push_str(TRUNCATED_MARKER);
    }

    let date = format_date(tuple.last_played, date_format);
    format!("{label:>9} {date:>11}. {} / {shown}", tuple.name)
}

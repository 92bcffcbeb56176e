use crate::config::FilterMode;

use super::model::{Catalog, CatalogIndex, ResumeTuple, TrackRecord, UNKNOWN};
use super::sanitize::{PLACEHOLDER, sanitize};

fn keeps(mode: FilterMode, record: &TrackRecord) -> bool {
    match mode {
        FilterMode::PodcastOnly => record.is_podcast(),
        FilterMode::All => true,
    }
}

/// Build the derived maps for `catalog` under `mode`.
///
/// Kept tracks get ordinals `1, 2, ...` in catalog order; dropped tracks
/// consume none and are listed in `excluded`. The result is always
/// produced, possibly empty.
pub fn index(catalog: &Catalog, mode: FilterMode) -> CatalogIndex {
    let mut out = CatalogIndex::default();
    let mut idx = 0usize;

    for record in &catalog.tracks {
        if !keeps(mode, record) {
            out.excluded.push(record.track_id.clone());
            continue;
        }
        idx += 1;

        let name = record.name.as_deref().unwrap_or(UNKNOWN);
        let artist = record.artist.as_deref().unwrap_or(UNKNOWN);
        out.resume.insert(
            idx,
            ResumeTuple {
                track_id: record.track_id.clone(),
                name: sanitize(name, PLACEHOLDER),
                artist: sanitize(artist, PLACEHOLDER),
                play_count: record.play_count,
                last_played: record.last_played,
            },
        );
        out.by_index.insert(idx, record.clone());
        out.track_to_index
            .entry(record.track_id.clone())
            .or_default()
            .push(idx);
    }

    log::debug!(
        "[index] {mode:?}: kept {} of {} tracks, excluded {}",
        idx,
        catalog.len(),
        out.excluded.len()
    );
    out
}

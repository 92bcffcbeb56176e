use std::cmp::Reverse;

use crate::config::{Inclusion, ResumeOrder};
use crate::library::time::time_key;
use crate::library::{CatalogIndex, ResumeTuple};

fn qualifies(inclusion: Inclusion, tuple: &ResumeTuple) -> bool {
    match inclusion {
        Inclusion::All => true,
        Inclusion::PlayedOnly => tuple.play_count > 0,
    }
}

/// Pick the entries among the `count` highest ordinals and order them.
///
/// A negative `count` selects nothing and `0` means no limit. The
/// inclusion criterion is applied after the last-N cut. Access ordering
/// uses a stable sort, so entries with equal keys stay in ordinal order.
pub fn select(
    index: &CatalogIndex,
    count: i64,
    inclusion: Inclusion,
    order: ResumeOrder,
) -> Vec<&ResumeTuple> {
    let Ok(count) = usize::try_from(count) else {
        return Vec::new();
    };

    // BTreeMap iterates in ascending ordinal order.
    let skip = match count {
        0 => 0,
        n => index.resume.len().saturating_sub(n),
    };
    let mut base: Vec<(usize, &ResumeTuple)> = index
        .resume
        .iter()
        .skip(skip)
        .filter(|(_, tuple)| qualifies(inclusion, tuple))
        .map(|(&idx, tuple)| (idx, tuple))
        .collect();

    match order {
        ResumeOrder::IndexAscending => {}
        ResumeOrder::IndexDescending => base.reverse(),
        ResumeOrder::AccessAscending => {
            base.sort_by_key(|(idx, tuple)| time_key(*idx, tuple.last_played));
        }
        ResumeOrder::AccessDescending => {
            base.sort_by_key(|(idx, tuple)| Reverse(time_key(*idx, tuple.last_played)));
        }
    }

    base.into_iter().map(|(_, tuple)| tuple).collect()
}

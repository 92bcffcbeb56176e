use std::collections::BTreeSet;
use std::fmt;

use super::model::CatalogIndex;

/// Aggregate anomaly found in one of the index maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the map that failed the check.
    pub map: &'static str,
    /// Distinct list lengths observed across the map's values.
    pub cardinalities: BTreeSet<usize>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seen: Vec<String> = self.cardinalities.iter().map(usize::to_string).collect();
        write!(
            f,
            "{}: expected every entry to hold exactly 1 index, saw lengths {{{}}}",
            self.map,
            seen.join(", ")
        )
    }
}

/// Empty when every track id maps to exactly one ordinal.
///
/// Otherwise a single diagnostic naming the map and the set of list
/// lengths seen. An empty index has no lengths at all, which is also
/// reported.
pub fn check(index: &CatalogIndex) -> Vec<Violation> {
    let cardinalities: BTreeSet<usize> = index.track_to_index.values().map(Vec::len).collect();
    if cardinalities.len() == 1 && cardinalities.contains(&1) {
        return Vec::new();
    }
    vec![Violation {
        map: "track-to-index",
        cardinalities,
    }]
}

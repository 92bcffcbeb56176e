//! Retrieval and rendering of resume tuples.
//!
//! `select` picks the "last N" entries of an index in a requested order,
//! `render` turns one entry into a fixed-width line and `LibrarySnapshot`
//! ties a loaded catalog to the settings that drive both.

mod format;
mod select;
mod snapshot;

pub use snapshot::{LastNDefaults, LibrarySnapshot};

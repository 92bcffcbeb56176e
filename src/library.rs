//! Catalog model, loading and indexing.
//!
//! A decoded catalog is turned into a [`CatalogIndex`]: dense 1-based
//! ordinals over the tracks that survive the active [`FilterMode`], one
//! [`ResumeTuple`] per kept track, and the reverse track-id lookup.
//!
//! [`FilterMode`]: crate::config::FilterMode

mod index;
mod load;
mod model;
mod sanitize;
pub mod time;
mod validate;

pub use index::index;
pub use load::read_catalog;
pub use model::*;
pub use validate::{Violation, check};

//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive catalog filtering, the
//! rendering of resume lines and the default "last N" listing, plus
//! helpers to load them from disk and environment.

mod load;
mod schema;

pub use schema::*;

//! Index an iTunes library catalog and list its most recently played tracks.

pub mod config;
pub mod error;
pub mod library;
pub mod resume;
pub mod runtime;

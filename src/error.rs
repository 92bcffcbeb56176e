//! Error taxonomy for catalog loading.
//!
//! Empty results are not errors (`load` reports them as `Ok(false)`) and
//! index inconsistencies are returned as [`crate::library::Violation`] values.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    #[error("malformed catalog: {0}")]
    Malformed(String),

    #[error("no catalog has been loaded yet, nothing to reload")]
    NoSource,
}

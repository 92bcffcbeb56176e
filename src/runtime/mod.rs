use std::env;
use std::io::{self, Write};

use crate::resume::LibrarySnapshot;

mod settings;

const DEFAULT_CATALOG: &str = "itunes.xml";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let path = env::args()
        .nth(1)
        .or_else(|| settings.catalog.path.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG.to_string());

    let mut snapshot = LibrarySnapshot::from_settings(&settings);
    if snapshot.load(&path)? {
        for violation in snapshot.check() {
            log::warn!("tuna: index check failed: {violation}");
        }
    } else {
        log::warn!("tuna: {path}: no tracks matched the {:?} filter", snapshot.filter());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in snapshot.refreshed() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use crate::config::{DisplayPolicy, FilterMode, Inclusion, ResumeOrder, ResumeSettings, Settings};
use crate::error::LoadError;
use crate::library::{self, Catalog, CatalogIndex, ResumeTuple, Violation};

use super::format::{render, render_line};
use super::select::select;

const DEFAULT_LAST: i64 = 100;

/// How the refreshed list is built after every load.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LastNDefaults {
    pub count: i64,
    pub inclusion: Inclusion,
    pub order: ResumeOrder,
    pub pretty: bool,
}

impl LastNDefaults {
    /// `all` lists the last `count` entries (100 when unset or negative);
    /// `played-only` always lists every played entry.
    pub fn configure(inclusion: Inclusion, count: Option<i64>) -> Self {
        let count = match inclusion {
            Inclusion::All => count.filter(|n| *n >= 0).unwrap_or(DEFAULT_LAST),
            Inclusion::PlayedOnly => 0,
        };
        Self {
            count,
            inclusion,
            order: ResumeOrder::AccessDescending,
            pretty: true,
        }
    }
}

impl Default for LastNDefaults {
    fn default() -> Self {
        Self::configure(Inclusion::All, None)
    }
}

impl From<&ResumeSettings> for LastNDefaults {
    fn from(s: &ResumeSettings) -> Self {
        Self {
            order: s.order,
            pretty: s.pretty,
            ..Self::configure(s.inclusion, s.count)
        }
    }
}

/// One loaded catalog, its derived index and the knobs that shape output.
///
/// Every load replaces the catalog, index and refreshed list wholesale.
#[derive(Debug, Clone)]
pub struct LibrarySnapshot {
    filter: FilterMode,
    policy: DisplayPolicy,
    date_format: String,
    defaults: LastNDefaults,
    source: Option<PathBuf>,
    catalog: Option<Catalog>,
    index: CatalogIndex,
    refreshed: Vec<String>,
}

impl LibrarySnapshot {
    pub fn new(filter: FilterMode) -> Self {
        Self {
            filter,
            policy: DisplayPolicy::ByTrackId,
            date_format: "%Y-%m-%d".to_string(),
            defaults: LastNDefaults::default(),
            source: None,
            catalog: None,
            index: CatalogIndex::default(),
            refreshed: Vec::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            policy: settings.display.policy,
            date_format: settings.display.date_format.clone(),
            defaults: LastNDefaults::from(&settings.resume),
            ..Self::new(settings.catalog.filter)
        }
    }

    /// Index an already decoded catalog; no source path is recorded.
    pub fn from_catalog(catalog: Catalog, settings: &Settings) -> Self {
        let mut snapshot = Self::from_settings(settings);
        snapshot.install(catalog);
        snapshot
    }

    /// Filter applied by the next load or [`Self::reindex`].
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }

    pub fn set_policy(&mut self, policy: DisplayPolicy) {
        self.policy = policy;
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Read the catalog at `path` and rebuild everything from it.
    ///
    /// Returns `Ok(false)` when nothing survives the filter. The path is
    /// remembered for [`Self::reload`] even if reading it fails.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<bool, LoadError> {
        let path = path.as_ref();
        self.source = Some(path.to_path_buf());
        log::info!("[catalog] loading {}", path.display());

        let catalog = library::read_catalog(path)?;
        Ok(self.install(catalog))
    }

    /// Load the previously used source again.
    pub fn reload(&mut self) -> Result<bool, LoadError> {
        let path = self.source.clone().ok_or(LoadError::NoSource)?;
        self.load(path)
    }

    /// Rebuild the index from the retained catalog, e.g. after
    /// [`Self::set_filter`].
    ///
    /// # Panics
    ///
    /// When no catalog has been loaded.
    pub fn reindex(&mut self) -> bool {
        let catalog = self.catalog().clone();
        self.install(catalog)
    }

    fn install(&mut self, catalog: Catalog) -> bool {
        self.index = library::index(&catalog, self.filter);
        self.catalog = Some(catalog);
        let LastNDefaults {
            count,
            inclusion,
            order,
            pretty,
        } = self.defaults;
        self.refreshed = if pretty {
            self.last_n(count, inclusion, order)
        } else {
            self.select(count, inclusion, order)
                .into_iter()
                .map(|tuple| format!("{tuple:?}"))
                .collect()
        };

        let kept = self.index.len();
        if kept == 0 {
            log::warn!("[catalog] no tracks left after {:?} filter", self.filter);
        } else {
            log::info!(
                "[catalog] indexed {kept} tracks ({} excluded)",
                self.index.excluded.len()
            );
        }
        kept > 0
    }

    /// The catalog as last decoded.
    ///
    /// # Panics
    ///
    /// When no catalog has been loaded.
    pub fn catalog(&self) -> &Catalog {
        match &self.catalog {
            Some(catalog) => catalog,
            None => panic!("catalog accessed before any load"),
        }
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn check(&self) -> Vec<Violation> {
        library::check(&self.index)
    }

    pub fn select(&self, count: i64, inclusion: Inclusion, order: ResumeOrder) -> Vec<&ResumeTuple> {
        select(&self.index, count, inclusion, order)
    }

    /// Same selection as [`Self::select`], rendered line by line.
    pub fn last_n(&self, count: i64, inclusion: Inclusion, order: ResumeOrder) -> Vec<String> {
        self.select(count, inclusion, order)
            .into_iter()
            .map(|tuple| self.render(tuple))
            .collect()
    }

    /// Render one tuple under the active display policy.
    pub fn render(&self, tuple: &ResumeTuple) -> String {
        match self.policy {
            DisplayPolicy::ByTrackId => render(tuple, &self.date_format),
            DisplayPolicy::ByRecomputedIndex => match self.index.indices_of(&tuple.track_id).first() {
                Some(idx) => render_line(&format!("idx.{idx}"), tuple, &self.date_format),
                None => "?".to_string(),
            },
        }
    }

    /// Lines produced with the configured defaults by the latest load:
    /// rendered lines, or the `Debug` form of each tuple when not pretty.
    pub fn refreshed(&self) -> &[String] {
        &self.refreshed
    }
}

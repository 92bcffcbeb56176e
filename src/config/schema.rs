use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tuna/config.toml` or `~/.config/tuna/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub display: DisplaySettings,
    pub resume: ResumeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file used when no path is given on the command line.
    pub path: Option<String>,
    /// Which tracks survive indexing.
    pub filter: FilterMode,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: None,
            filter: FilterMode::PodcastOnly,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Leading label of each rendered line.
    pub policy: DisplayPolicy,
    /// strftime-style format of the last-played column.
    pub date_format: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            policy: DisplayPolicy::ByTrackId,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResumeSettings {
    /// Which entries the refreshed list keeps.
    pub inclusion: Inclusion,
    /// How many of the highest indices to list.
    ///
    /// Unset (or negative) means 100 for `all`; `played-only` always lists
    /// every qualifying entry.
    pub count: Option<i64>,
    /// Ordering of the refreshed list.
    pub order: ResumeOrder,
    /// Render fixed-width lines; when false the raw tuples are listed.
    pub pretty: bool,
}

impl Default for ResumeSettings {
    fn default() -> Self {
        Self {
            inclusion: Inclusion::All,
            count: None,
            order: ResumeOrder::AccessDescending,
            pretty: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Keep a track only when its genre is exactly `Podcast`.
    #[serde(alias = "podcast_only", alias = "podcasts", alias = "P")]
    PodcastOnly,
    /// Keep every track.
    #[serde(alias = "everything")]
    All,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayPolicy {
    /// Show the catalog's own track id.
    #[serde(alias = "by_track_id", alias = "track")]
    ByTrackId,
    /// Show `idx.N`, where N is the ordinal assigned while indexing.
    #[serde(alias = "by_recomputed_index", alias = "index")]
    ByRecomputedIndex,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Inclusion {
    #[serde(alias = "a")]
    All,
    /// Only entries with a play count above zero.
    #[serde(alias = "played_only", alias = "played", alias = "b")]
    PlayedOnly,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResumeOrder {
    #[serde(alias = "index_ascending", alias = "i")]
    IndexAscending,
    #[serde(alias = "index_descending", alias = "I")]
    IndexDescending,
    /// Most recently played first; unplayed entries fall back to their ordinal.
    #[serde(alias = "access_descending", alias = "A")]
    AccessDescending,
    #[serde(alias = "access_ascending", alias = "a")]
    AccessAscending,
}

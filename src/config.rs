//! Browser configuration: category policy, hidden records, filter toggles.
//!
//! The schema covers the core-relevant surface only; purely presentational
//! host options (icons, tooltips, entry formatting) are host concerns. A
//! host embeds [`Config`] directly; the CLI harness and tests load it from
//! a JSON file.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::{Result, ShelfError};

/// Category assigned to records that resolve through no other source.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Category treated as "libraries" by the bottom-of-list ordering policy.
pub const DEFAULT_LIBRARY_CATEGORY: &str = "library";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_library_category() -> String {
    DEFAULT_LIBRARY_CATEGORY.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Hash, Serialize, Deserialize)]
pub struct Config {
    /// Catch-all category for records with no resolvable category.
    /// Always sorts near the bottom of the grouped view.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// The category the libraries-at-bottom policy pushes below everything else.
    #[serde(default = "default_library_category")]
    pub library_category: String,

    /// Places the library category at the bottom, below the default category.
    #[serde(default = "default_true")]
    pub libraries_at_bottom: bool,

    /// Custom category assignments that override every other source.
    /// Format: `id;category`, one entry per element.
    #[serde(default)]
    pub category_overrides: Vec<String>,

    /// Additional well-known-id assignments, merged over the compiled-in
    /// table. Format: `id;category`.
    #[serde(default)]
    pub builtin_categories: Vec<String>,

    /// Record ids hidden from every view.
    #[serde(default)]
    pub hidden: Vec<String>,

    /// Only show records that expose a configuration screen.
    #[serde(default)]
    pub configs_only: bool,

    /// Logs records that fall into the catch-all category when the record
    /// store loads.
    #[serde(default)]
    pub log_uncategorized: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_category: default_category(),
            library_category: default_library_category(),
            libraries_at_bottom: true,
            category_overrides: Vec::new(),
            builtin_categories: Vec::new(),
            hidden: Vec::new(),
            configs_only: false,
            log_uncategorized: false,
        }
    }
}

impl Config {
    /// The catch-all category, lowercased as the resolver contract requires.
    pub fn default_category(&self) -> String {
        self.default_category.to_lowercase()
    }

    /// The library category, lowercased.
    pub fn library_category(&self) -> String {
        self.library_category.to_lowercase()
    }

    /// True if `id` is on the hidden list (case-insensitive).
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden
            .iter()
            .any(|h| h.trim().eq_ignore_ascii_case(id))
    }

    /// Stable hash of every core-relevant field. Hosts compare fingerprints
    /// across reloads to decide when to fire the invalidate signal.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Load config from a JSON file.
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|source| ShelfError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load config from a JSON file, falling back to defaults on any failure.
    #[instrument(name = "load_config", skip_all, fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Config::default();
        }
        match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        }
    }
}

/// Split one `id;category` mapping line. Returns None for lines without a
/// separator or with an empty half. Both halves are trimmed and lowercased.
pub(crate) fn parse_mapping(entry: &str) -> Option<(String, String)> {
    let (id, category) = entry.split_once(';')?;
    let id = id.trim().to_lowercase();
    let category = category.trim().to_lowercase();
    if id.is_empty() || category.is_empty() {
        return None;
    }
    Some((id, category))
}

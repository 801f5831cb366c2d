//! Record model and pluggable record sources.
//!
//! A [`Record`] is the immutable description of one installed plugin as the
//! host reports it. Records arrive through [`RecordSource`] implementations
//! (one per origin) and are merged into a lazily-loaded, id-keyed snapshot
//! held by [`RecordStore`]. The snapshot is cached until [`RecordStore::invalidate`]
//! drops it; the next read reloads every source synchronously.

use std::collections::BTreeMap;
use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{Result, ResultExt, ShelfError};

/// One installed plugin as reported by the host.
///
/// Ids are the unique key and are lowercase-normalized on construction and
/// on store insert. Optional fields that the host does not know stay `None`
/// and simply never match the corresponding filter clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-separated free text, as hosts commonly report it.
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    /// Category the plugin declares for itself, if any.
    #[serde(default)]
    pub declared_category: Option<String>,
    /// Whether the host can open a configuration screen for this plugin.
    #[serde(default)]
    pub has_config: bool,
}

impl Record {
    /// Minimal record with a normalized id; remaining fields default.
    pub fn new(id: &str, display_name: &str) -> Record {
        Record {
            id: id.to_lowercase(),
            display_name: display_name.to_string(),
            version: String::new(),
            description: None,
            authors: None,
            license: None,
            declared_category: None,
            has_config: false,
        }
    }
}

/// Capability interface for one origin of records.
///
/// Hosts with several plugin registries implement this once per registry;
/// the store merges them. A failing source logs and contributes nothing.
pub trait RecordSource: Send + Sync {
    /// Short origin name used in logs and error messages.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<Record>>;
}

/// In-memory source for tests and hosts that already hold their records.
pub struct StaticSource {
    name: String,
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(name: &str, records: Vec<Record>) -> StaticSource {
        StaticSource {
            name: name.to_string(),
            records,
        }
    }
}

impl RecordSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

/// Reads a JSON array of records from a file. Used by the CLI harness.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: PathBuf) -> JsonSource {
        JsonSource { path }
    }
}

impl RecordSource for JsonSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<Vec<Record>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| ShelfError::RecordSource {
            name: self.name().to_string(),
            message: format!("read '{}': {}", self.path.display(), e),
        })?;
        serde_json::from_str(&text).map_err(|e| ShelfError::RecordSource {
            name: self.name().to_string(),
            message: format!("parse '{}': {}", self.path.display(), e),
        })
    }
}

/// Merged, id-keyed record snapshot, loaded lazily and cached until
/// invalidated.
#[derive(Default)]
pub struct RecordStore {
    sources: Vec<Box<dyn RecordSource>>,
    snapshot: RwLock<Option<BTreeMap<String, Record>>>,
}

impl RecordStore {
    pub fn new() -> RecordStore {
        RecordStore::default()
    }

    pub fn with_source(source: Box<dyn RecordSource>) -> RecordStore {
        let mut store = RecordStore::new();
        store.add_source(source);
        store
    }

    /// Sources are consulted in registration order; on duplicate ids the
    /// later source wins.
    pub fn add_source(&mut self, source: Box<dyn RecordSource>) {
        self.sources.push(source);
        self.invalidate();
    }

    /// All records, sorted by id. Loads the snapshot on first access.
    pub fn all(&self) -> Vec<Record> {
        self.ensure_loaded();
        self.snapshot
            .read()
            .as_ref()
            .map(|map| map.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Look up one record by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<Record> {
        self.ensure_loaded();
        self.snapshot
            .read()
            .as_ref()
            .and_then(|map| map.get(&id.to_lowercase()).cloned())
    }

    pub fn len(&self) -> usize {
        self.ensure_loaded();
        self.snapshot.read().as_ref().map_or(0, |map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the cached snapshot; the next read reloads every source.
    pub fn invalidate(&self) {
        *self.snapshot.write() = None;
    }

    #[instrument(name = "load_records", level = "debug", skip_all)]
    fn ensure_loaded(&self) {
        if self.snapshot.read().is_some() {
            return;
        }
        let mut merged: BTreeMap<String, Record> = BTreeMap::new();
        for source in &self.sources {
            let Some(records) = source.load().warn_on_err() else {
                continue;
            };
            for mut record in records {
                record.id = record.id.to_lowercase();
                if let Some(previous) = merged.insert(record.id.clone(), record) {
                    warn!(
                        id = %previous.id,
                        source = source.name(),
                        "Duplicate record id, later source wins"
                    );
                }
            }
        }
        debug!(record_count = merged.len(), "Record snapshot loaded");
        *self.snapshot.write() = Some(merged);
    }
}

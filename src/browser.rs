//! The browser facade: records + config + query, composed.
//!
//! Owns the record store and configuration, and the two lazily rebuilt
//! caches derived from them (category resolver, suggestion corpus). The
//! host drives it from its event loop: update the query on each keystroke
//! and re-read [`Browser::grouped`]; call [`Browser::invalidate`] when the
//! configuration changes and [`Browser::reload_records`] when the record
//! set does. Every operation is synchronous; caches rebuild on the next
//! read after an invalidation.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::categories::CategoryResolver;
use crate::config::Config;
use crate::corpus::SuggestionCorpus;
use crate::grouping::{group, GroupedView};
use crate::query::{matches, tokenize};
use crate::records::{Record, RecordStore};
use crate::suggest;

pub struct Browser {
    store: RecordStore,
    config: Config,
    query: String,
    resolver: RwLock<Option<Arc<CategoryResolver>>>,
    corpus: RwLock<Option<Arc<SuggestionCorpus>>>,
}

impl Browser {
    pub fn new(store: RecordStore, config: Config) -> Browser {
        Browser {
            store,
            config,
            query: String::new(),
            resolver: RwLock::new(None),
            corpus: RwLock::new(None),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. A no-op when the fingerprint is
    /// unchanged; otherwise the derived caches are invalidated.
    pub fn set_config(&mut self, config: Config) {
        if config.fingerprint() == self.config.fingerprint() {
            debug!("Config unchanged, keeping caches");
            return;
        }
        self.config = config;
        self.invalidate();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Configuration-changed signal: drop the resolver and corpus caches.
    /// They rebuild on the next read.
    pub fn invalidate(&self) {
        *self.resolver.write() = None;
        *self.corpus.write() = None;
    }

    /// Record-set-changed signal: drop the record snapshot and everything
    /// derived from it.
    pub fn reload_records(&self) {
        self.store.invalidate();
        self.invalidate();
    }

    /// The current query evaluated against the visible record set, grouped
    /// for display.
    pub fn grouped(&self) -> GroupedView {
        let resolver = self.resolver();
        let records = self.filtered_records(&resolver);
        group(&records, &resolver, &self.config)
    }

    /// Completion tail for the token currently being typed in the query.
    pub fn suggest(&self) -> String {
        suggest::suggest(&self.query, &self.corpus())
    }

    /// Apply the current suggestion to the query (the explicit accept
    /// action). Returns the new query; a no-op when there is no suggestion.
    pub fn accept_suggestion(&mut self) -> &str {
        let tail = self.suggest();
        self.query = suggest::accept_suggestion(&self.query, &tail);
        &self.query
    }

    /// Records that fall into the catch-all category.
    pub fn uncategorized(&self) -> Vec<Record> {
        let resolver = self.resolver();
        let records = self.store.all();
        resolver
            .uncategorized(&records)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Log the catch-all records when the config asks for it. Hosts call
    /// this once after startup.
    pub fn log_uncategorized(&self) {
        if !self.config.log_uncategorized {
            return;
        }
        let uncategorized = self.uncategorized();
        if uncategorized.is_empty() {
            info!("All records have an assigned category");
            return;
        }
        info!(count = uncategorized.len(), "Records without an assigned category");
        for record in &uncategorized {
            info!(id = %record.id, "Uncategorized record");
        }
    }

    /// Records surviving the hidden list, the configs-only toggle, and the
    /// current query clauses, in store order.
    fn filtered_records(&self, resolver: &CategoryResolver) -> Vec<Record> {
        let clauses = tokenize(&self.query);
        self.store
            .all()
            .into_iter()
            .filter(|record| !self.config.is_hidden(&record.id))
            .filter(|record| !self.config.configs_only || record.has_config)
            .filter(|record| matches(record, &clauses, resolver))
            .collect()
    }

    fn resolver(&self) -> Arc<CategoryResolver> {
        if let Some(resolver) = self.resolver.read().as_ref() {
            return Arc::clone(resolver);
        }
        let resolver = Arc::new(CategoryResolver::from_config(&self.config));
        *self.resolver.write() = Some(Arc::clone(&resolver));
        resolver
    }

    /// The corpus sees every non-hidden record, independent of the query
    /// and the configs-only toggle.
    fn corpus(&self) -> Arc<SuggestionCorpus> {
        if let Some(corpus) = self.corpus.read().as_ref() {
            return Arc::clone(corpus);
        }
        let resolver = self.resolver();
        let records = self.store.all();
        let corpus = Arc::new(SuggestionCorpus::build(&records, &resolver, |record| {
            !self.config.is_hidden(&record.id)
        }));
        *self.corpus.write() = Some(Arc::clone(&corpus));
        corpus
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;

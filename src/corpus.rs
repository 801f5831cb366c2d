//! Suggestion corpus: pre-sorted autocomplete candidates.
//!
//! Five groups in fixed order - display names (unprefixed), ids (`@`),
//! resolved categories (`#`), authors (`!`), licenses (`$`) - each
//! deduplicated and sorted case-insensitively, then concatenated. The
//! suggestion engine scans the concatenation front to back, so group order
//! is the tie-break between candidate kinds. Rebuilt from scratch whenever
//! the record set or configuration changes; record counts are small enough
//! that incremental maintenance would buy nothing.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::categories::CategoryResolver;
use crate::query::{PREFIX_AUTHOR, PREFIX_CATEGORY, PREFIX_ID, PREFIX_LICENSE};
use crate::records::Record;

/// Precomputed candidate strings for autocompletion, prefix markers
/// included.
#[derive(Debug, Clone, Default)]
pub struct SuggestionCorpus {
    entries: Vec<String>,
}

impl SuggestionCorpus {
    /// Build the corpus from the records passing `visible`.
    #[instrument(level = "debug", skip_all, fields(record_count = records.len()))]
    pub fn build<F>(records: &[Record], resolver: &CategoryResolver, visible: F) -> SuggestionCorpus
    where
        F: Fn(&Record) -> bool,
    {
        let mut names: HashSet<String> = HashSet::new();
        let mut ids: HashSet<String> = HashSet::new();
        let mut categories: HashSet<String> = HashSet::new();
        let mut authors: HashSet<String> = HashSet::new();
        let mut licenses: HashSet<String> = HashSet::new();

        for record in records.iter().filter(|record| visible(record)) {
            names.insert(record.display_name.clone());
            ids.insert(record.id.clone());
            categories.insert(resolver.resolve(record));

            if let Some(author_field) = record.authors.as_deref() {
                for author in author_field.split(',') {
                    let author = author.trim();
                    if !author.is_empty() {
                        authors.insert(author.to_string());
                    }
                }
            }

            if let Some(license) = record.license.as_deref() {
                if !license.trim().is_empty() {
                    licenses.insert(license.to_string());
                }
            }
        }

        let mut entries = sorted(names, None);
        entries.extend(sorted(ids, Some(PREFIX_ID)));
        entries.extend(sorted(categories, Some(PREFIX_CATEGORY)));
        entries.extend(sorted(authors, Some(PREFIX_AUTHOR)));
        entries.extend(sorted(licenses, Some(PREFIX_LICENSE)));

        debug!(entry_count = entries.len(), "Suggestion corpus built");
        SuggestionCorpus { entries }
    }

    /// Candidates in scan order: names, ids, categories, authors, licenses.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sort one group case-insensitively and attach its prefix marker.
fn sorted(group: HashSet<String>, prefix: Option<char>) -> Vec<String> {
    let mut values: Vec<String> = group.into_iter().collect();
    values.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    match prefix {
        Some(marker) => values
            .into_iter()
            .map(|value| format!("{}{}", marker, value))
            .collect(),
        None => values,
    }
}

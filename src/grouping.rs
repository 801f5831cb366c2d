//! Grouping and ordering of filtered records for display.
//!
//! Filtered records partition by resolved category; members sort by display
//! name, case-insensitive. Categories order by rank, then lexicographically:
//! with the libraries-at-bottom policy enabled the library category ranks
//! below everything else, the catch-all default ranks just above it, and
//! every other category ranks first. A category that is simultaneously the
//! library and the default ranks as library.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::categories::CategoryResolver;
use crate::config::Config;
use crate::records::Record;

/// One category header with its sorted member records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub category: String,
    pub members: Vec<Record>,
}

/// Display-ready structure: ordered categories, each with sorted members.
/// Categories with no surviving members do not appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedView {
    pub groups: Vec<Group>,
}

/// One row of the flattened display list, the shape a uniform list widget
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// A category header.
    Header(String),
    /// A record row; the index points into [`GroupedView::flat_records`].
    Entry(usize),
}

impl GroupedView {
    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|group| group.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Members in display order, headers stripped. [`ListRow::Entry`]
    /// indexes point into this.
    pub fn flat_records(&self) -> Vec<&Record> {
        self.groups
            .iter()
            .flat_map(|group| group.members.iter())
            .collect()
    }

    /// Flatten into a header + entry row stream.
    pub fn rows(&self) -> Vec<ListRow> {
        let mut rows = Vec::new();
        let mut index = 0;
        for group in &self.groups {
            rows.push(ListRow::Header(group.category.clone()));
            for _ in &group.members {
                rows.push(ListRow::Entry(index));
                index += 1;
            }
        }
        rows
    }
}

/// Partition records by resolved category and order for display.
#[instrument(level = "debug", skip_all, fields(record_count = records.len()))]
pub fn group(records: &[Record], resolver: &CategoryResolver, config: &Config) -> GroupedView {
    let mut buckets: HashMap<String, Vec<Record>> = HashMap::new();
    for record in records {
        buckets
            .entry(resolver.resolve(record))
            .or_default()
            .push(record.clone());
    }

    let default_category = config.default_category();
    let library_category = config.library_category();
    let libraries_at_bottom = config.libraries_at_bottom;

    let mut categories: Vec<String> = buckets.keys().cloned().collect();
    categories.sort_by(|a, b| {
        let rank_a = category_rank(a, &default_category, &library_category, libraries_at_bottom);
        let rank_b = category_rank(b, &default_category, &library_category, libraries_at_bottom);
        match rank_a.cmp(&rank_b) {
            Ordering::Equal => a.cmp(b),
            other => other,
        }
    });

    let groups: Vec<Group> = categories
        .into_iter()
        .map(|category| {
            let mut members = buckets.remove(&category).unwrap_or_default();
            members.sort_by(|a, b| {
                a.display_name
                    .to_lowercase()
                    .cmp(&b.display_name.to_lowercase())
                    .then_with(|| a.display_name.cmp(&b.display_name))
            });
            Group { category, members }
        })
        .collect();

    debug!(
        group_count = groups.len(),
        record_count = records.len(),
        "Records grouped"
    );
    GroupedView { groups }
}

/// Bottom-of-list rank: library below default below everything else. The
/// library rule is evaluated first, so a category that is both library and
/// default ranks as library.
fn category_rank(
    category: &str,
    default_category: &str,
    library_category: &str,
    libraries_at_bottom: bool,
) -> u8 {
    if libraries_at_bottom && category == library_category {
        2
    } else if category == default_category {
        1
    } else {
        0
    }
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod tests;

//! Conjunctive clause evaluation against records.
//!
//! A record matches a clause list iff it matches every clause; an empty
//! list matches everything. Matching is case-insensitive substring
//! containment against the field the clause kind selects.

use tracing::{debug, instrument};

use crate::categories::CategoryResolver;
use crate::records::Record;

use super::tokenize::tokenize;
use super::types::{Clause, ClauseKind};

/// Check if haystack contains needle using ASCII case-insensitive matching.
/// `needle_lower` must already be lowercase. No allocation.
#[inline]
pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle_lower: &str) -> bool {
    let h = haystack.as_bytes();
    let n = needle_lower.as_bytes();
    if n.is_empty() {
        return true;
    }
    if n.len() > h.len() {
        return false;
    }
    'outer: for i in 0..=(h.len() - n.len()) {
        for j in 0..n.len() {
            if h[i + j].to_ascii_lowercase() != n[j] {
                continue 'outer;
            }
        }
        return true;
    }
    false
}

/// Check if haystack starts with needle using ASCII case-insensitive
/// matching. `needle_lower` must already be lowercase. No allocation.
#[inline]
pub(crate) fn starts_with_ignore_ascii_case(haystack: &str, needle_lower: &str) -> bool {
    let h = haystack.as_bytes();
    let n = needle_lower.as_bytes();
    if n.len() > h.len() {
        return false;
    }
    h.iter()
        .zip(n.iter())
        .all(|(hb, nb)| hb.to_ascii_lowercase() == *nb)
}

/// Evaluate one clause against a record. Empty-valued clauses match
/// everything; absent optional fields match nothing else.
pub fn clause_matches(record: &Record, clause: &Clause, resolver: &CategoryResolver) -> bool {
    if clause.is_noop() {
        return true;
    }

    match clause.kind {
        ClauseKind::Category => {
            contains_ignore_ascii_case(&resolver.resolve(record), &clause.value)
        }
        ClauseKind::Id => contains_ignore_ascii_case(&record.id, &clause.value),
        ClauseKind::Author => record
            .authors
            .as_deref()
            .is_some_and(|authors| contains_ignore_ascii_case(authors, &clause.value)),
        ClauseKind::License => record
            .license
            .as_deref()
            .is_some_and(|license| contains_ignore_ascii_case(license, &clause.value)),
        ClauseKind::Plain => contains_ignore_ascii_case(&record.display_name, &clause.value),
    }
}

/// A record matches iff it matches every clause (logical AND).
pub fn matches(record: &Record, clauses: &[Clause], resolver: &CategoryResolver) -> bool {
    clauses
        .iter()
        .all(|clause| clause_matches(record, clause, resolver))
}

/// Tokenize `query` and keep the records matching every clause.
#[instrument(level = "debug", skip_all, fields(query_len = query.len()))]
pub fn filter<'a>(
    query: &str,
    records: &'a [Record],
    resolver: &CategoryResolver,
) -> Vec<&'a Record> {
    let clauses = tokenize(query);
    let matched: Vec<&Record> = records
        .iter()
        .filter(|record| matches(record, &clauses, resolver))
        .collect();
    debug!(
        clause_count = clauses.len(),
        matched = matched.len(),
        total = records.len(),
        "Query evaluated"
    );
    matched
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

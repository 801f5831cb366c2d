//! Category resolution for records.
//!
//! The effective category of a record comes from a fixed precedence chain,
//! first match wins: explicit override mapping, the record's own declared
//! category, the built-in table of well-known ids, then the configured
//! catch-all. Output is always lowercase and never empty.

use std::collections::HashMap;

use tracing::warn;

use crate::config::{parse_mapping, Config};
use crate::records::Record;

/// Well-known plugin ids with a curated category assignment. Config
/// `builtin_categories` entries are merged over this table.
static BUILT_IN_CATEGORIES: &[(&str, &str)] = &[
    ("jei", "utility"),
    ("jade", "utility"),
    ("journeymap", "utility"),
    ("sodium", "system"),
    ("embeddium", "system"),
    ("ferritecore", "system"),
    ("create", "technology"),
    ("mekanism", "technology"),
    ("ae2", "storage"),
    ("sophisticatedbackpacks", "storage"),
    ("botania", "magic"),
    ("ars_nouveau", "magic"),
    ("farmersdelight", "agriculture"),
    ("terralith", "worldgen"),
    ("biomesoplenty", "worldgen"),
    ("alexsmobs", "mobs"),
    ("curios", "equipment"),
    ("architectury", "library"),
    ("cloth_config", "library"),
    ("geckolib", "library"),
    ("balm", "library"),
    ("bookshelf", "library"),
    ("supplementaries", "functional"),
    ("chipped", "building"),
];

/// Resolves effective categories. Built once from a [`Config`]; the owner
/// rebuilds it after a configuration change.
pub struct CategoryResolver {
    overrides: HashMap<String, String>,
    builtin: HashMap<String, String>,
    default_category: String,
}

impl CategoryResolver {
    pub fn from_config(config: &Config) -> CategoryResolver {
        let mut builtin: HashMap<String, String> = BUILT_IN_CATEGORIES
            .iter()
            .map(|(id, category)| (id.to_string(), category.to_string()))
            .collect();
        for entry in &config.builtin_categories {
            match parse_mapping(entry) {
                Some((id, category)) => {
                    builtin.insert(id, category);
                }
                None => warn!(entry = %entry, "Skipping malformed builtin category entry"),
            }
        }

        let mut overrides = HashMap::new();
        for entry in &config.category_overrides {
            match parse_mapping(entry) {
                Some((id, category)) => {
                    overrides.insert(id, category);
                }
                None => warn!(entry = %entry, "Skipping malformed category override"),
            }
        }

        CategoryResolver {
            overrides,
            builtin,
            default_category: config.default_category(),
        }
    }

    /// Effective category for a record: override, declared, built-in, then
    /// the catch-all. Always lowercase, never empty.
    pub fn resolve(&self, record: &Record) -> String {
        let id = record.id.to_lowercase();

        if let Some(category) = self.overrides.get(&id) {
            return category.clone();
        }

        if let Some(declared) = &record.declared_category {
            let declared = declared.trim();
            if !declared.is_empty() {
                return declared.to_lowercase();
            }
        }

        if let Some(category) = self.builtin.get(&id) {
            return category.clone();
        }

        self.default_category.clone()
    }

    /// True iff the record has an assigned category - that is, resolution
    /// would succeed without reaching the catch-all fallback.
    pub fn has_category(&self, record: &Record) -> bool {
        let id = record.id.to_lowercase();

        if self.overrides.contains_key(&id) {
            return true;
        }

        if let Some(declared) = &record.declared_category {
            if !declared.trim().is_empty() {
                return true;
            }
        }

        self.builtin.contains_key(&id)
    }

    /// Records that fall into the catch-all category.
    pub fn uncategorized<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records
            .iter()
            .filter(|record| !self.has_category(record))
            .collect()
    }

    /// The configured catch-all category, lowercase.
    pub fn default_category(&self) -> &str {
        &self.default_category
    }
}

#[cfg(test)]
#[path = "categories_tests.rs"]
mod tests;

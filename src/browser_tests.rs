use super::*;
use crate::records::{RecordSource, StaticSource};

fn record(id: &str, name: &str, category: Option<&str>) -> Record {
    Record {
        declared_category: category.map(str::to_string),
        ..Record::new(id, name)
    }
}

fn browser_with(records: Vec<Record>, config: Config) -> Browser {
    let store = RecordStore::with_source(Box::new(StaticSource::new("test", records)));
    Browser::new(store, config)
}

fn category_order(view: &GroupedView) -> Vec<&str> {
    view.groups.iter().map(|g| g.category.as_str()).collect()
}

#[test]
fn empty_query_groups_everything() {
    // Alpha has no category, Beta declares "library"; with
    // libraries-at-bottom the catch-all precedes the library group.
    let browser = browser_with(
        vec![
            record("a", "Alpha", None),
            record("b", "Beta", Some("library")),
        ],
        Config::default(),
    );
    let view = browser.grouped();
    assert_eq!(category_order(&view), vec!["uncategorized", "library"]);
    assert_eq!(view.groups[0].members[0].display_name, "Alpha");
    assert_eq!(view.groups[1].members[0].display_name, "Beta");
}

#[test]
fn query_narrows_the_grouped_view() {
    let mut browser = browser_with(
        vec![
            record("alphatool", "Alpha Tool", Some("tools")),
            record("betatool", "Beta Tool", Some("tools")),
        ],
        Config::default(),
    );
    browser.set_query("#tools @alpha");
    let view = browser.grouped();
    assert_eq!(view.record_count(), 1);
    assert_eq!(view.groups[0].members[0].id, "alphatool");
}

#[test]
fn hidden_records_are_absent_from_view_and_corpus() {
    let config = Config {
        hidden: vec!["ghost".to_string()],
        ..Config::default()
    };
    let mut browser = browser_with(
        vec![record("ghost", "Ghost", None), record("real", "Real", None)],
        config,
    );
    assert_eq!(browser.grouped().record_count(), 1);

    browser.set_query("@gh");
    assert_eq!(browser.suggest(), "");
    browser.set_query("@re");
    assert_eq!(browser.suggest(), "al");
}

#[test]
fn configs_only_filters_the_view_but_not_the_corpus() {
    let config = Config {
        configs_only: true,
        ..Config::default()
    };
    let with_config = Record {
        has_config: true,
        ..record("configurable", "Configurable", None)
    };
    let mut browser = browser_with(vec![with_config, record("plain", "Plain", None)], config);
    assert_eq!(browser.grouped().record_count(), 1);
    assert_eq!(browser.grouped().groups[0].members[0].id, "configurable");

    // Suggestions still cover every visible record
    browser.set_query("@pl");
    assert_eq!(browser.suggest(), "ain");
}

#[test]
fn accept_suggestion_updates_the_query() {
    let mut browser = browser_with(
        vec![Record {
            authors: Some("John Doe".to_string()),
            ..record("alpha", "Alpha", None)
        }],
        Config::default(),
    );

    browser.set_query("@al");
    assert_eq!(browser.accept_suggestion(), "@alpha");

    browser.set_query("!John");
    assert_eq!(browser.accept_suggestion(), "!\"John Doe\"");

    // No suggestion means no change
    browser.set_query("@zzz");
    assert_eq!(browser.accept_suggestion(), "@zzz");
}

#[test]
fn set_config_invalidates_and_regroups() {
    let mut browser = browser_with(
        vec![record("a", "Alpha", Some("tools"))],
        Config::default(),
    );
    assert_eq!(category_order(&browser.grouped()), vec!["tools"]);

    browser.set_config(Config {
        category_overrides: vec!["a;library".to_string()],
        ..Config::default()
    });
    assert_eq!(category_order(&browser.grouped()), vec!["library"]);
}

#[test]
fn set_config_with_same_fingerprint_keeps_caches() {
    let mut browser = browser_with(vec![record("a", "Alpha", None)], Config::default());
    let before = browser.grouped();
    browser.set_config(Config::default());
    assert_eq!(browser.grouped(), before);
}

#[test]
fn reload_records_picks_up_source_changes() {
    use parking_lot::RwLock;
    use std::sync::Arc;

    struct SharedSource(Arc<RwLock<Vec<Record>>>);
    impl RecordSource for SharedSource {
        fn name(&self) -> &str {
            "shared"
        }
        fn load(&self) -> crate::error::Result<Vec<Record>> {
            Ok(self.0.read().clone())
        }
    }

    let shared = Arc::new(RwLock::new(vec![record("a", "Alpha", None)]));
    let store = RecordStore::with_source(Box::new(SharedSource(Arc::clone(&shared))));
    let browser = Browser::new(store, Config::default());
    assert_eq!(browser.grouped().record_count(), 1);

    shared.write().push(record("b", "Beta", None));
    // Snapshot is cached until the reload signal
    assert_eq!(browser.grouped().record_count(), 1);
    browser.reload_records();
    assert_eq!(browser.grouped().record_count(), 2);

    // The corpus cache was dropped too
    let view = browser.grouped();
    assert_eq!(view.record_count(), 2);
}

#[test]
fn uncategorized_lists_only_catch_all_records() {
    let browser = browser_with(
        vec![
            record("a", "Alpha", Some("tools")),
            record("b", "Beta", None),
        ],
        Config::default(),
    );
    let uncategorized = browser.uncategorized();
    assert_eq!(uncategorized.len(), 1);
    assert_eq!(uncategorized[0].id, "b");
}

use super::*;
use crate::config::Config;

fn resolver() -> CategoryResolver {
    CategoryResolver::from_config(&Config::default())
}

fn sample() -> Record {
    Record {
        version: "1.2.0".to_string(),
        description: Some("Draws a world map".to_string()),
        authors: Some("Jane Doe, Bob".to_string()),
        license: Some("MIT".to_string()),
        declared_category: Some("utility".to_string()),
        ..Record::new("minimap", "Mini Map")
    }
}

#[test]
fn empty_clause_list_matches_everything() {
    assert!(matches(&sample(), &[], &resolver()));
}

#[test]
fn plain_clause_tests_display_name() {
    let record = sample();
    let resolver = resolver();
    assert!(matches(&record, &tokenize("mini"), &resolver));
    assert!(matches(&record, &tokenize("MAP"), &resolver));
    assert!(!matches(&record, &tokenize("compass"), &resolver));
    // Plain clauses test the display name, not the id
    assert!(!matches(&record, &tokenize("minimap"), &resolver));
}

#[test]
fn id_clause_tests_record_id() {
    let record = sample();
    let resolver = resolver();
    assert!(matches(&record, &tokenize("@mini"), &resolver));
    assert!(!matches(&record, &tokenize("@other"), &resolver));
}

#[test]
fn category_clause_uses_resolved_category() {
    let record = sample();
    let resolver = resolver();
    assert!(matches(&record, &tokenize("#util"), &resolver));
    assert!(!matches(&record, &tokenize("#library"), &resolver));
}

#[test]
fn category_clause_sees_overrides() {
    let config = Config {
        category_overrides: vec!["minimap;library".to_string()],
        ..Config::default()
    };
    let resolver = CategoryResolver::from_config(&config);
    let record = sample();
    assert!(matches(&record, &tokenize("#library"), &resolver));
    assert!(!matches(&record, &tokenize("#utility"), &resolver));
}

#[test]
fn author_clause_tests_authors_field() {
    let record = sample();
    let resolver = resolver();
    assert!(matches(&record, &tokenize("!jane"), &resolver));
    assert!(matches(&record, &tokenize("!\"jane doe\""), &resolver));
    assert!(!matches(&record, &tokenize("!carol"), &resolver));
}

#[test]
fn license_clause_tests_license_field() {
    let record = sample();
    let resolver = resolver();
    assert!(matches(&record, &tokenize("$mit"), &resolver));
    assert!(!matches(&record, &tokenize("$gpl"), &resolver));
}

#[test]
fn absent_optional_fields_never_match_nonempty_clauses() {
    let record = Record::new("bare", "Bare");
    let resolver = resolver();
    assert!(!matches(&record, &tokenize("!anyone"), &resolver));
    assert!(!matches(&record, &tokenize("$mit"), &resolver));
}

#[test]
fn absent_optional_fields_match_empty_clauses() {
    let record = Record::new("bare", "Bare");
    let resolver = resolver();
    // A bare prefix is a no-op clause, not a "field present" test
    assert!(matches(&record, &tokenize("!"), &resolver));
    assert!(matches(&record, &tokenize("$"), &resolver));
}

#[test]
fn clauses_combine_conjunctively() {
    let resolver = resolver();
    let tools = Record {
        declared_category: Some("tools".to_string()),
        ..Record::new("alphatool", "Alpha Tool")
    };
    let other = Record {
        declared_category: Some("tools".to_string()),
        ..Record::new("beta", "Beta Tool")
    };
    let clauses = tokenize("#tools @alpha");
    assert!(matches(&tools, &clauses, &resolver));
    assert!(!matches(&other, &clauses, &resolver));
}

#[test]
fn filter_returns_matching_records_in_input_order() {
    let resolver = resolver();
    let records = vec![
        Record::new("a", "Apple"),
        Record::new("b", "Banana"),
        Record::new("c", "Apricot"),
    ];
    let matched = filter("ap", &records, &resolver);
    let names: Vec<&str> = matched.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Apricot"]);
}

#[test]
fn filter_with_empty_query_returns_everything() {
    let resolver = resolver();
    let records = vec![Record::new("a", "A"), Record::new("b", "B")];
    assert_eq!(filter("", &records, &resolver).len(), 2);
}

#[test]
fn contains_helper_handles_edges() {
    assert!(contains_ignore_ascii_case("anything", ""));
    assert!(contains_ignore_ascii_case("Mini Map", "mini"));
    assert!(contains_ignore_ascii_case("Mini Map", "i m"));
    assert!(!contains_ignore_ascii_case("ab", "abc"));
}

#[test]
fn starts_with_helper_handles_edges() {
    assert!(starts_with_ignore_ascii_case("Anything", ""));
    assert!(starts_with_ignore_ascii_case("Alpha", "alp"));
    assert!(!starts_with_ignore_ascii_case("Alpha", "lph"));
    assert!(!starts_with_ignore_ascii_case("ab", "abc"));
}

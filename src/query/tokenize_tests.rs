use super::*;

fn clause(kind: ClauseKind, value: &str) -> Clause {
    Clause::new(kind, value)
}

#[test]
fn empty_input_yields_no_clauses() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("    ").is_empty());
}

#[test]
fn single_plain_word() {
    assert_eq!(tokenize("map"), vec![clause(ClauseKind::Plain, "map")]);
}

#[test]
fn values_are_lowercased() {
    assert_eq!(tokenize("MiniMap"), vec![clause(ClauseKind::Plain, "minimap")]);
    assert_eq!(tokenize("@MyMod"), vec![clause(ClauseKind::Id, "mymod")]);
}

#[test]
fn each_prefix_selects_its_kind() {
    assert_eq!(tokenize("#tools"), vec![clause(ClauseKind::Category, "tools")]);
    assert_eq!(tokenize("@mymod"), vec![clause(ClauseKind::Id, "mymod")]);
    assert_eq!(tokenize("!jane"), vec![clause(ClauseKind::Author, "jane")]);
    assert_eq!(tokenize("$mit"), vec![clause(ClauseKind::License, "mit")]);
}

#[test]
fn spaces_separate_clauses() {
    assert_eq!(
        tokenize("#tools @alpha map"),
        vec![
            clause(ClauseKind::Category, "tools"),
            clause(ClauseKind::Id, "alpha"),
            clause(ClauseKind::Plain, "map"),
        ]
    );
}

#[test]
fn repeated_spaces_are_skipped() {
    assert_eq!(
        tokenize("  map   #tools  "),
        vec![
            clause(ClauseKind::Plain, "map"),
            clause(ClauseKind::Category, "tools"),
        ]
    );
}

#[test]
fn quoted_value_keeps_spaces() {
    assert_eq!(
        tokenize("!\"John Doe\""),
        vec![clause(ClauseKind::Author, "john doe")]
    );
}

#[test]
fn quoted_plain_clause() {
    assert_eq!(
        tokenize("\"my plugin\" #tools"),
        vec![
            clause(ClauseKind::Plain, "my plugin"),
            clause(ClauseKind::Category, "tools"),
        ]
    );
}

#[test]
fn unterminated_quote_runs_to_end() {
    assert_eq!(
        tokenize("#\"abc"),
        vec![clause(ClauseKind::Category, "abc")]
    );
    assert_eq!(
        tokenize("\"half open value"),
        vec![clause(ClauseKind::Plain, "half open value")]
    );
}

#[test]
fn bare_prefix_yields_noop_clause() {
    let clauses = tokenize("@");
    assert_eq!(clauses, vec![clause(ClauseKind::Id, "")]);
    assert!(clauses[0].is_noop());
}

#[test]
fn prefix_followed_by_space_yields_noop_clause() {
    assert_eq!(
        tokenize("# map"),
        vec![
            clause(ClauseKind::Category, ""),
            clause(ClauseKind::Plain, "map"),
        ]
    );
}

#[test]
fn empty_quotes_yield_noop_clause() {
    assert_eq!(tokenize("!\"\""), vec![clause(ClauseKind::Author, "")]);
}

#[test]
fn prefix_inside_a_word_is_literal() {
    // Only the first character of a token is a prefix position.
    assert_eq!(tokenize("c#"), vec![clause(ClauseKind::Plain, "c#")]);
}

#[test]
fn round_trip_parses_to_same_clauses() {
    for raw in [
        "map",
        "#tools @alpha",
        "!\"John Doe\" $mit",
        "\"two words\" plain",
        "#\"unterminated",
        "@",
    ] {
        let clauses = tokenize(raw);
        let rendered = to_query_string(&clauses);
        assert_eq!(tokenize(&rendered), clauses, "round trip failed for {raw:?}");
    }
}

//! Query tokenizer: raw search text to an ordered clause list.
//!
//! The scan is left to right. Runs of spaces separate clauses. A reserved
//! prefix character starts a typed clause; a double quote (with or without
//! a preceding prefix) starts a quoted value running to the next quote or
//! end of input. Malformed input never fails: an unterminated quote
//! consumes the rest of the string, and a bare prefix yields an empty
//! (match-all) clause.

use super::types::{Clause, ClauseKind};

/// Parse a raw search string into clauses. Empty input yields an empty
/// list, which matches every record.
pub fn tokenize(raw: &str) -> Vec<Clause> {
    let chars: Vec<char> = raw.chars().collect();
    let mut clauses = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i] == ' ' {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        let kind = match ClauseKind::from_prefix(chars[i]) {
            Some(kind) => {
                i += 1;
                kind
            }
            None => ClauseKind::Plain,
        };
        let value = consume_value(&chars, &mut i);
        clauses.push(Clause::new(kind, &value));
    }

    clauses
}

/// Consume one clause value at `*i`: quoted (delimiters stripped, runs to
/// the closing quote or end of input) or bare (runs to the next space).
fn consume_value(chars: &[char], i: &mut usize) -> String {
    if *i < chars.len() && chars[*i] == '"' {
        *i += 1;
        let start = *i;
        while *i < chars.len() && chars[*i] != '"' {
            *i += 1;
        }
        let value: String = chars[start..*i].iter().collect();
        if *i < chars.len() {
            *i += 1;
        }
        value
    } else {
        let start = *i;
        while *i < chars.len() && chars[*i] != ' ' {
            *i += 1;
        }
        chars[start..*i].iter().collect()
    }
}

/// Render a clause list back into query syntax, one space between clauses.
/// `tokenize(to_query_string(clauses))` parses to an equivalent list.
pub fn to_query_string(clauses: &[Clause]) -> String {
    clauses
        .iter()
        .map(Clause::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;

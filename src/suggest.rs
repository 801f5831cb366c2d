//! Inline autocompletion for the search box.
//!
//! [`suggest`] computes the tail that would complete the token currently
//! being typed - the characters a host renders as ghost text after the
//! cursor. [`accept_suggestion`] applies a tail to the input, quote-wrapping
//! a prefixed token whose completed value contains a space so it stays one
//! searchable unit.

use crate::corpus::SuggestionCorpus;
use crate::query::{is_filter_prefix, starts_with_ignore_ascii_case};

/// The token currently being typed: everything after the last space that
/// is not inside a quoted value.
pub fn current_token(text: &str) -> &str {
    let mut token_start = 0;
    let mut in_quotes = false;

    for (i, c) in text.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ' ' && !in_quotes {
            token_start = i + 1;
        }
    }

    &text[token_start..]
}

/// Compute the completion tail for the current token, scanning corpus
/// candidates front to back; the first prefix match wins.
///
/// Prefixed tokens only consider candidates carrying the same marker.
/// Plain tokens only consider unprefixed (display-name) candidates, so a
/// plain token never completes to an id, category, author, or license even
/// when one would prefix-match. When the matched candidate contains a space
/// and the token was quote-opened, the tail includes the closing quote.
/// Returns an empty string when there is nothing to suggest.
pub fn suggest(input: &str, corpus: &SuggestionCorpus) -> String {
    if input.is_empty() {
        return String::new();
    }

    let token = current_token(input);
    let Some(first) = token.chars().next() else {
        return String::new();
    };

    let is_filter = is_filter_prefix(first);
    let (search_part, quote_opened) = if is_filter {
        let rest = &token[first.len_utf8()..];
        match rest.strip_prefix('"') {
            Some(stripped) => (stripped, true),
            None => (rest, false),
        }
    } else {
        (token, false)
    };
    let search_lower = search_part.to_lowercase();

    for candidate in corpus.entries() {
        let Some(candidate_first) = candidate.chars().next() else {
            continue;
        };

        if is_filter {
            if candidate_first != first {
                continue;
            }
            let candidate_value = &candidate[candidate_first.len_utf8()..];
            if starts_with_ignore_ascii_case(candidate_value, &search_lower) {
                let mut tail = candidate_value[search_lower.len()..].to_string();
                if candidate_value.contains(' ') && quote_opened {
                    tail.push('"');
                }
                return tail;
            }
        } else {
            if is_filter_prefix(candidate_first) {
                continue;
            }
            if starts_with_ignore_ascii_case(candidate, &search_lower) {
                return candidate[search_lower.len()..].to_string();
            }
        }
    }

    String::new()
}

/// Apply an accepted suggestion tail to the input.
///
/// When the current token is prefixed, not yet quoted, and its completed
/// value contains a space, the token is rewritten as
/// `prefix + '"' + value + tail + '"'`; otherwise the tail is appended.
/// The caller moves the cursor to the end of the returned string. An empty
/// tail is a no-op.
pub fn accept_suggestion(input: &str, tail: &str) -> String {
    if tail.is_empty() {
        return input.to_string();
    }

    let token = current_token(input);
    if let Some(prefix) = token.chars().next().filter(|c| is_filter_prefix(*c)) {
        let rest = &token[prefix.len_utf8()..];
        let already_quoted = rest.starts_with('"');
        if !already_quoted {
            let completed = format!("{}{}", rest, tail);
            if completed.contains(' ') {
                let token_start = input.len() - token.len();
                return format!("{}{}\"{}\"", &input[..token_start], prefix, completed);
            }
        }
    }

    format!("{}{}", input, tail)
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;

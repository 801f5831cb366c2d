//! Query span classification for search-input coloring.
//!
//! Classifies every byte of the raw input into contiguous spans labeled by
//! clause kind, tracking prefix and quote state the same way the tokenizer
//! does. A prefixed token's span covers its marker, quotes included; spaces
//! and unprefixed tokens are plain. Pure data - a host text input maps the
//! kinds to colors.

use crate::query::ClauseKind;

/// One contiguous run of input bytes sharing a clause kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpan {
    /// Byte range start, inclusive.
    pub start: usize,
    /// Byte range end, exclusive.
    pub end: usize,
    pub kind: ClauseKind,
}

/// Classify `text` into spans. Adjacent runs of the same kind are merged;
/// the spans cover the whole input without gaps.
pub fn highlight(text: &str) -> Vec<QuerySpan> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut kinds: Vec<ClauseKind> = vec![ClauseKind::Plain; chars.len()];
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i].1;

        if c == ' ' {
            i += 1;
            continue;
        }

        if let Some(kind) = ClauseKind::from_prefix(c) {
            kinds[i] = kind;
            i += 1;

            if i < chars.len() && chars[i].1 == '"' {
                // Opening quote through closing quote (or end of input)
                loop {
                    kinds[i] = kind;
                    i += 1;
                    if i >= chars.len() || chars[i].1 == '"' {
                        break;
                    }
                }
                if i < chars.len() {
                    kinds[i] = kind;
                    i += 1;
                }
            } else {
                while i < chars.len() && chars[i].1 != ' ' {
                    kinds[i] = kind;
                    i += 1;
                }
            }
        } else {
            while i < chars.len() && chars[i].1 != ' ' {
                i += 1;
            }
        }
    }

    merge_runs(text, &chars, &kinds)
}

/// Convenience for hosts that color the whole box by the clause being
/// typed: the kind at the very end of the input.
pub fn trailing_kind(text: &str) -> ClauseKind {
    highlight(text)
        .last()
        .map(|span| span.kind)
        .unwrap_or(ClauseKind::Plain)
}

fn merge_runs(text: &str, chars: &[(usize, char)], kinds: &[ClauseKind]) -> Vec<QuerySpan> {
    let mut spans: Vec<QuerySpan> = Vec::new();

    for (index, &(byte_start, _)) in chars.iter().enumerate() {
        let kind = kinds[index];
        let end = next_boundary(text, chars, index);
        let extends_last = spans.last().is_some_and(|last| last.kind == kind);
        if extends_last {
            if let Some(last) = spans.last_mut() {
                last.end = end;
            }
        } else {
            spans.push(QuerySpan {
                start: byte_start,
                end,
                kind,
            });
        }
    }

    spans
}

fn next_boundary(text: &str, chars: &[(usize, char)], index: usize) -> usize {
    chars
        .get(index + 1)
        .map(|&(byte_start, _)| byte_start)
        .unwrap_or(text.len())
}

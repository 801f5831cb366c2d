//! The search query language: typed clauses, tokenizer, and evaluator.
//!
//! A query is free text split into clauses. A clause is either plain
//! (matched against display names) or prefixed with one of four reserved
//! characters selecting the field to match: `#` category, `@` id,
//! `!` author, `$` license. Values may be double-quoted to include spaces.
//! Clauses combine conjunctively.

mod filter;
mod tokenize;
mod types;

pub use filter::{clause_matches, filter, matches};
pub(crate) use filter::starts_with_ignore_ascii_case;
pub(crate) use types::is_filter_prefix;
pub use tokenize::{tokenize, to_query_string};
pub use types::{Clause, ClauseKind, PREFIX_AUTHOR, PREFIX_CATEGORY, PREFIX_ID, PREFIX_LICENSE};

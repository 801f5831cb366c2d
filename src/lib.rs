//! plugin-shelf - the search core of an installed-plugin browser.
//!
//! This library takes a flat set of plugin records and turns free-text
//! queries into a display-ready, categorized list: a typed filter-clause
//! language, inline autocompletion over a precomputed suggestion corpus,
//! category resolution with an override chain, and a deterministic
//! grouping/ordering policy. Rendering, input focus, and persistence stay
//! with the embedding host.

pub mod browser;
pub mod categories;
pub mod config;
pub mod corpus;
pub mod error;
pub mod grouping;
pub mod highlight;
pub mod logging;
pub mod query;
pub mod records;
pub mod suggest;

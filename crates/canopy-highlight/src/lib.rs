//! Terminal styling for canopy.
//!
//! Provides ANSI styling helpers for headers, status messages and tree listings, plus a
//! TOML highlighter used when showing configuration.

#![warn(missing_docs)]

mod style;
mod syntax;
mod tree;

pub use style::{dim, header, subheader, success, value, warning};
pub use syntax::Highlighter;
pub use tree::{indent_content, tree_prefix};

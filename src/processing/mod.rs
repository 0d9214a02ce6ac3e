//! Entry processing logic.
//!
//! - [`sort`] - Lexical ordering of fetched entries

mod sort;

pub use sort::sort_entries;

//! Remote IP list retrieval.
//!
//! - [`fetch`] - HTTP download of the source list
//! - [`lines`] - Line scanning of the downloaded body into entries

mod fetch;
mod lines;

pub use fetch::{build_client, fetch_entries, DEFAULT_SOURCE_URL};
pub use lines::{scan_lines, LineScanner};

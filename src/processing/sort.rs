//! Lexical sorting of IP list entries.

use crate::models::IpEntry;

/// Sort entries ascending by their raw text, byte by byte.
///
/// Duplicates are kept. No IP-aware ordering is applied, so `10.0.0.5`
/// sorts before `2.2.2.2`.
pub fn sort_entries(mut entries: Vec<IpEntry>) -> Vec<IpEntry> {
    entries.sort();
    log::debug!("Sorted {} entries", entries.len());
    entries
}

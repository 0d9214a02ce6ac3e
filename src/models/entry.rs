//! IP list entry model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single line from the source list: an IP address or CIDR block, kept as an
/// opaque string. Never empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpEntry {
    /// The raw entry text, trimmed.
    pub id: String,
}

impl IpEntry {
    /// Build an entry from a raw source line.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for blank lines.
    pub fn new(line: &str) -> Option<IpEntry> {
        let id = line.trim();
        if id.is_empty() {
            None
        } else {
            Some(IpEntry { id: id.to_string() })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for IpEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        let entry = IpEntry::new("  2.2.2.2 \t").unwrap();
        assert_eq!(entry.as_str(), "2.2.2.2");
    }

    #[test]
    fn test_new_blank() {
        assert_eq!(IpEntry::new(""), None);
        assert_eq!(IpEntry::new("   \r"), None);
    }

    #[test]
    fn test_new_not_validated() {
        let entry = IpEntry::new("not-an-ip").unwrap();
        assert_eq!(entry.to_string(), "not-an-ip");
    }

    #[test]
    fn test_serialize_shape() {
        let entry = IpEntry::new("10.0.0.0/8").unwrap();
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"id":"10.0.0.0/8"}"#
        );
    }
}

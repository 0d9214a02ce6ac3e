//! Domain models for vpnlist.
//!
//! - [`IpEntry`] - one unvalidated IP address or CIDR block from the source list

mod entry;

pub use entry::IpEntry;

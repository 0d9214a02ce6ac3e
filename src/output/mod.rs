//! Output encoding for sorted IP lists.
//!
//! This module turns a sorted entry list into a destination file:
//! - [`format`] - Resolution of the output format from the destination name
//! - [`csv`] - CSV encoder
//! - [`json`] - JSON encoder
//! - [`gzip`] - Gzip wrapper around any other format

mod csv;
mod format;
mod gzip;
mod json;

pub use self::format::OutputFormat;

use crate::error::Result;
use crate::models::IpEntry;
use std::io::Write;
use std::path::Path;

/// Write `entries` to `sink` in the format selected by the extension of `name`.
///
/// `name` is only inspected, never opened. A `.gz` suffix wraps the format
/// named by the remaining extension.
///
/// # Errors
/// * [`crate::Error::UnsupportedFormat`] - extension is not `.json`, `.csv` or `.gz`
/// * [`crate::Error::Encoding`] - the encoder or the sink failed
pub fn write_entries(sink: &mut dyn Write, name: &Path, entries: &[IpEntry]) -> Result<()> {
    OutputFormat::from_path(name)?.write(sink, entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::processing::sort_entries;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn sorted(ids: &[&str]) -> Vec<IpEntry> {
        sort_entries(ids.iter().filter_map(|id| IpEntry::new(id)).collect())
    }

    fn render(name: &str, entries: &[IpEntry]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_entries(&mut buf, Path::new(name), entries).expect("write failed");
        buf
    }

    fn gunzip(bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut out)
            .expect("gunzip failed");
        out
    }

    #[test]
    fn test_write_csv_example() {
        let entries = sorted(&["10.0.0.5", "", "  2.2.2.2  ", "10.0.0.5"]);
        let out = render("vpnlist.csv", &entries);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id\n10.0.0.5\n10.0.0.5\n2.2.2.2\n"
        );
    }

    #[test]
    fn test_write_json_round_trip() {
        let entries = sorted(&["8.8.8.8", "1.1.1.0/24", "1.1.1.0/24"]);
        let out = render("vpnlist.json", &entries);
        let back: Vec<IpEntry> = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn test_write_csv_round_trip() {
        let entries = sorted(&["8.8.8.8", "1.1.1.0/24", "a,b", "quote\"d"]);
        let out = render("vpnlist.csv", &entries);
        let mut reader = ::csv::Reader::from_reader(&out[..]);
        let back: Vec<IpEntry> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn test_write_gzip_matches_inner_bytes() {
        let entries = sorted(&["10.0.0.5", "2.2.2.2", "172.16.0.0/12"]);
        for inner in ["list.csv", "list.json"] {
            let plain = render(inner, &entries);
            let packed = render(&format!("{inner}.gz"), &entries);
            assert_ne!(packed, plain);
            assert_eq!(gunzip(&packed), plain, "mismatch for {inner}.gz");
        }
    }

    #[test]
    fn test_write_extension_case_insensitive() {
        let entries = sorted(&["1.1.1.1"]);
        assert_eq!(render("LIST.CSV", &entries), render("list.csv", &entries));
        assert_eq!(
            gunzip(&render("LIST.JSON.GZ", &entries)),
            render("list.json", &entries)
        );
    }

    #[test]
    fn test_write_unsupported() {
        let mut buf = Vec::new();
        let err = write_entries(&mut buf, Path::new("vpnlist.txt"), &sorted(&["1.1.1.1"]))
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == ".txt"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_gzip_unsupported_inner() {
        let mut buf = Vec::new();
        let err = write_entries(&mut buf, Path::new("vpnlist.txt.gz"), &sorted(&["1.1.1.1"]))
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == ".txt"));
    }
}

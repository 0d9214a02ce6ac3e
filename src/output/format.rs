//! Output format resolution.

use super::{csv, gzip, json};
use crate::error::{Error, Result};
use crate::models::IpEntry;
use std::fmt;
use std::io::Write;
use std::path::Path;

/// Encoding applied to the destination, chosen by file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    /// Best-compression gzip around another format, e.g. `list.csv.gz`.
    Gzip(Box<OutputFormat>),
}

impl OutputFormat {
    /// Resolve the format from the lowercased extension of `path`.
    ///
    /// Each trailing `.gz` adds a gzip layer and the extension before it is
    /// resolved in turn.
    pub fn from_path(path: &Path) -> Result<OutputFormat> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
        let lower = ext.as_deref().map(str::to_lowercase);

        match lower.as_deref() {
            Some("gz") => {
                let inner = OutputFormat::from_path(&path.with_extension(""))?;
                Ok(OutputFormat::Gzip(Box::new(inner)))
            }
            Some("csv") => Ok(OutputFormat::Csv),
            Some("json") => Ok(OutputFormat::Json),
            _ => Err(Error::UnsupportedFormat(
                ext.map(|e| format!(".{e}")).unwrap_or_default(),
            )),
        }
    }

    /// Encode `entries` into `sink`.
    pub fn write(&self, sink: &mut dyn Write, entries: &[IpEntry]) -> Result<()> {
        match self {
            OutputFormat::Json => json::write_json(sink, entries),
            OutputFormat::Csv => csv::write_csv(sink, entries),
            OutputFormat::Gzip(inner) => gzip::write_gzip(sink, inner, entries),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Gzip(inner) => write!(f, "{inner}+gzip"),
        }
    }
}

//! CSV output formatting for IP lists.

use crate::error::{EncodingError, Result};
use crate::models::IpEntry;
use csv::WriterBuilder;
use std::io::Write;

const CSV_HEADER: &str = "id";

/// Write an `id` header row, then one row per entry.
///
/// The header is always written, also for an empty list.
pub fn write_csv(sink: &mut dyn Write, entries: &[IpEntry]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);

    writer
        .write_record([CSV_HEADER])
        .map_err(EncodingError::from)?;
    for entry in entries {
        writer.serialize(entry).map_err(EncodingError::from)?;
    }
    writer.flush().map_err(EncodingError::from)?;
    Ok(())
}

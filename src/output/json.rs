//! JSON encoder: an array of `{"id": ...}` objects.

use crate::error::{EncodingError, Result};
use crate::models::IpEntry;
use std::io::Write;

/// Write `entries` as a pretty-printed JSON array followed by a newline.
pub fn write_json(sink: &mut dyn Write, entries: &[IpEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *sink, entries).map_err(EncodingError::from)?;
    sink.write_all(b"\n").map_err(EncodingError::from)?;
    Ok(())
}

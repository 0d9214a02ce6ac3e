//! Gzip wrapper around another output format.

use super::OutputFormat;
use crate::error::{EncodingError, Result};
use crate::models::IpEntry;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Encode `entries` as `inner`, compressed with best-compression gzip.
///
/// The gzip stream is finished on both paths. If the inner write failed its
/// error is returned and any error from finishing the stream is dropped.
pub fn write_gzip(sink: &mut dyn Write, inner: &OutputFormat, entries: &[IpEntry]) -> Result<()> {
    let mut encoder = GzEncoder::new(sink, Compression::best());

    let written = inner.write(&mut encoder, entries);
    let finished = encoder.finish();

    written?;
    finished.map_err(EncodingError::from)?;
    Ok(())
}

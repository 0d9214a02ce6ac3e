//! Line scanner for newline-delimited IP lists.

use crate::error::{Error, Result};
use crate::models::IpEntry;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Split};

/// Lazily scans a buffered reader into entries, in source order.
///
/// Each line is trimmed and blank lines are skipped. Bytes that are not valid
/// UTF-8 are replaced rather than rejected, since entries are never validated.
pub struct LineScanner<R> {
    segments: Split<R>,
}

/// Start scanning `reader`. Nothing is read until the first entry is requested.
pub fn scan_lines<R: AsyncBufRead + Unpin>(reader: R) -> LineScanner<R> {
    LineScanner {
        segments: reader.split(b'\n'),
    }
}

impl<R: AsyncBufRead + Unpin> LineScanner<R> {
    /// Read up to the next non-blank line. `Ok(None)` at end of input.
    pub async fn next_entry(&mut self) -> Result<Option<IpEntry>> {
        while let Some(bytes) = self.segments.next_segment().await.map_err(Error::Body)? {
            if let Some(entry) = IpEntry::new(&String::from_utf8_lossy(&bytes)) {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }

    /// Drain the reader into a list.
    pub async fn collect_entries(mut self) -> Result<Vec<IpEntry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.next_entry().await? {
            entries.push(entry);
        }
        Ok(entries)
    }
}

//! Download a newline-delimited IP/CIDR list, sort it and save it as JSON or
//! CSV, optionally gzip-compressed.
//!
//! The pipeline is [`source::fetch_entries`] → [`processing::sort_entries`] →
//! [`output::write_entries`], driven once by [`run`].

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

pub use error::{EncodingError, Error, Result};
pub use models::IpEntry;
pub use output::OutputFormat;

use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What to fetch and where to save it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the newline-delimited list.
    pub source: String,
    /// Destination file; its extension selects the output format.
    pub destination: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: source::DEFAULT_SOURCE_URL.to_string(),
            destination: PathBuf::from("vpnlist.json"),
        }
    }
}

/// Fetch, sort and write the list described by `config`.
///
/// The destination format is checked before anything is downloaded, and the
/// destination file is only created once the fetch succeeded. Returns the
/// number of entries written.
pub async fn run(config: &Config) -> Result<usize> {
    let format = OutputFormat::from_path(&config.destination)?;
    log::debug!(
        "Destination {} as {}",
        config.destination.display(),
        format
    );

    let client = source::build_client()?;
    let entries = source::fetch_entries(&client, &config.source).await?;
    let entries = processing::sort_entries(entries);

    write_destination(&config.destination, &entries)?;
    log::info!(
        "Wrote {} entries to {} ({})",
        entries.len(),
        config.destination.display().to_string().on_blue(),
        format
    );
    Ok(entries.len())
}

/// Create or truncate `path` and write `entries` in the format its name selects.
///
/// A partially written file is left in place on failure.
pub fn write_destination(path: &Path, entries: &[IpEntry]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    let mut sink = BufWriter::new(file);

    output::write_entries(&mut sink, path, entries)?;
    sink.flush().map_err(EncodingError::from)?;
    Ok(())
}

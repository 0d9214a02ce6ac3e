//! Error types for vpnlist.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level messages stay short; the cause is reachable via `source()`.
/// Use [`error_chain`] to render the whole chain.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code: {code} {reason}")]
    HttpStatus { code: u16, reason: String },

    #[error("reading source body")]
    Body(#[source] std::io::Error),

    #[error("cannot create {}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encoding error")]
    Encoding(#[from] EncodingError),

    #[error("unsupported file extension: {0}")]
    UnsupportedFormat(String),
}

/// Failures raised by one of the output encoders.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::HttpStatus`] from a response status.
    pub fn http_status(status: reqwest::StatusCode) -> Self {
        Error::HttpStatus {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        }
    }
}

/// Render `err` followed by every `source()` below it, one `caused by:` per line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        out.push_str("\n  caused by: ");
        out.push_str(&e.to_string());
        cause = e.source();
    }
    out
}

//! HTTP download of the source list.

use super::lines::scan_lines;
use crate::error::{Error, Result};
use crate::models::IpEntry;
use colored::Colorize;
use futures::TryStreamExt;
use reqwest::Client;
use std::io;
use tokio_util::io::StreamReader;

/// Public list of VPN provider IPv4 ranges.
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/X4BNet/lists_vpn/main/ipv4.txt";

/// Build the HTTP client used for fetching.
///
/// No request timeout is set; transport defaults apply.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(format!("vpnlist/{}", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Download `url` and return its non-blank trimmed lines in source order.
///
/// The body is scanned as it arrives rather than buffered whole.
///
/// # Errors
/// * [`Error::Transport`] - request could not be sent or no response headers arrived
/// * [`Error::HttpStatus`] - any status outside 200..=299
/// * [`Error::Body`] - the body stream failed part way
pub async fn fetch_entries(client: &Client, url: &str) -> Result<Vec<IpEntry>> {
    log::info!("Fetching {}", url.on_blue());

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        log::warn!("{} returned {}", url, status);
        return Err(Error::http_status(status));
    }
    log::debug!("{} returned {}, scanning body", url, status);

    let body = response
        .bytes_stream()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e));
    let entries = scan_lines(StreamReader::new(Box::pin(body)))
        .collect_entries()
        .await?;
    log::info!("Fetched {} entries", entries.len());
    Ok(entries)
}

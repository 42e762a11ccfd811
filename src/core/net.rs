// src/core/net.rs

// Blocking HTTPS GET for the options quote page. The host is TLS-only and
// compresses aggressively, so this rides a real client instead of a socket.

use std::time::Duration;

use crate::config::consts::{HOST, QUOTE_PREFIX, TIMEOUT_SECS, USER_AGENT};
use crate::core::error::ScrapeResult;

/// Fetch the options page for `ticker`, optionally pinned to one expiration
/// identifier (epoch seconds as text). Returns the page body as text; a
/// non-success status or transport failure is an error.
pub fn fetch_options_page(ticker: &str, expiration: Option<&str>) -> ScrapeResult<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .brotli(true)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;

    let url = options_url(ticker, expiration);
    tracing::debug!(%url, "fetching options page");

    let body = client.get(&url).send()?.error_for_status()?.text()?;
    tracing::debug!(bytes = body.len(), "page fetched");
    Ok(body)
}

/// `https://{host}/quote/{ticker}/options[?date={expiration}]`
pub fn options_url(ticker: &str, expiration: Option<&str>) -> String {
    let base = format!("https://{HOST}{QUOTE_PREFIX}{ticker}/options");
    match expiration {
        Some(date) => format!("{base}?date={date}"),
        None => base,
    }
}

#![allow(clippy::result_large_err)]

use crate::errors::{feed_error, Result};
use assetreg_core::errors::ExErrorKind;
use std::time::Duration;

/// Download the feed with one blocking GET; no retry
///
/// # Errors
///
/// Returns `ExternalService` on connection failure, timeout or a non-2xx
/// status.
pub fn fetch_url(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| feed_error(ExErrorKind::ExternalService, url, e))?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| feed_error(ExErrorKind::ExternalService, url, e))?;

    let bytes = response
        .bytes()
        .map_err(|e| feed_error(ExErrorKind::ExternalService, url, e))?;

    tracing::debug!(url, size_bytes = bytes.len(), "asset feed downloaded");
    Ok(bytes.to_vec())
}

//! Asset feed loading
//!
//! The feed is a CSV resource reached by URL or local path. Loading never
//! aborts the session: any failure becomes [`AssetFeed::Unavailable`] and the
//! report engine refuses to run until a later session succeeds.

#![allow(clippy::result_large_err)]

pub mod decode;
pub mod fetch;
pub mod parse;

use crate::errors::{feed_error, Result};
use assetreg_core::errors::ExErrorKind;
use assetreg_core::model::{AssetFeed, AssetTable};
use assetreg_core::{log_op_end, log_op_error, log_op_start};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default HTTP timeout for the feed download
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the asset feed comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    /// `http://` and `https://` locations are URLs, anything else a path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            FeedSource::Url(location.to_string())
        } else {
            FeedSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Url(url) => f.write_str(url),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for FeedSource {
    fn from(location: &str) -> Self {
        FeedSource::parse(location)
    }
}

/// Load the feed for this session
///
/// Failures are logged and returned as [`AssetFeed::Unavailable`] with a
/// human-readable reason.
pub fn load_feed(source: &FeedSource, timeout: Duration) -> AssetFeed {
    let location = source.to_string();
    log_op_start!("feed_load", source = %location);
    let start = std::time::Instant::now();

    match load_table(source, timeout) {
        Ok(table) => {
            log_op_end!(
                "feed_load",
                duration_ms = start.elapsed().as_millis() as u64,
                row_count = table.len()
            );
            AssetFeed::Loaded(table)
        }
        Err(e) => {
            log_op_error!(
                "feed_load",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                source = %location
            );
            AssetFeed::unavailable(format!("{}: {}", location, e.message()))
        }
    }
}

/// Fetch, decode and parse the feed
///
/// # Errors
///
/// - `ExternalService`: HTTP failure
/// - `Io`: local file cannot be read
/// - `Serialization`: malformed CSV
pub fn load_table(source: &FeedSource, timeout: Duration) -> Result<AssetTable> {
    let location = source.to_string();
    let bytes = match source {
        FeedSource::Url(url) => fetch::fetch_url(url, timeout)?,
        FeedSource::File(path) => {
            fs::read(path).map_err(|e| feed_error(ExErrorKind::Io, &location, e))?
        }
    };
    let text = decode::decode_text(&bytes);
    parse::parse_assets(&location, &text)
}

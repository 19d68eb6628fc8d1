//! Asset Register Store - persistence and feed loading
//!
//! This crate provides:
//! - `RosterStore`: the employee roster bound to one file, rewritten in full
//!   (temp file + rename) after every mutation, created on first open
//! - Roster backends for CSV and XLSX files, chosen by extension
//! - Asset feed loading from a URL or local path, with encoding fallback
//!
//! Errors are `ExError` values from `assetreg-core`.

pub mod atomic;
pub mod backend;
pub mod errors;
pub mod feed;
pub mod roster_store;

pub use backend::{backend_for_path, CsvBackend, RosterBackend, XlsxBackend};
pub use feed::{load_feed, FeedSource};
pub use roster_store::RosterStore;

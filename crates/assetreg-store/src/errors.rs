//! Error handling for assetreg-store
//!
//! Wraps assetreg-core ExError with store-specific helpers

use assetreg_core::errors::{ExError, ExErrorKind, RegistryError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error that names the file involved
pub fn io_error_at(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    io_error(operation, err).with_entity_id(path.display().to_string())
}

/// Create a roster backend error (file could not be encoded or decoded)
pub fn backend_error(operation: &str, backend: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op(operation.to_string())
        .with_message(format!("{} backend: {}", backend, reason))
}

/// Create an asset feed error
///
/// `kind` is `ExternalService` for HTTP failures, `Io` for local files and
/// `Serialization` for unreadable CSV.
pub fn feed_error(kind: ExErrorKind, source: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(kind)
        .with_op("feed_load")
        .with_entity_id(source.to_string())
        .with_message(reason.to_string())
}

/// Convert a domain error raised inside a store operation
pub fn from_registry(operation: &str, err: RegistryError) -> ExError {
    ExError::from(err).with_op(operation.to_string())
}

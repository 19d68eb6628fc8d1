//! Core types shared across the asset register crates
//!
//! This crate provides foundational types used by the error and logging
//! facilities of every other crate in the workspace:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction of
//!   employee contact details
//! - **Event names**: `start` / `end` / `end_error` for operation logs

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId};
pub use sensitive::Sensitive;

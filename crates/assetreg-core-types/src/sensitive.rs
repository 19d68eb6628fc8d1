//! Sensitive data marker for automatic redaction
//!
//! Employee phone numbers and email addresses are personal data. Wrapping
//! them in `Sensitive<T>` before they reach a log field keeps them out of
//! log output while the rest of a record stays readable.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use assetreg_core_types::Sensitive;
///
/// let phone = Sensitive::new("+44 20 7946 0000");
/// assert_eq!(format!("{:?}", phone), "***REDACTED***");
/// assert_eq!(format!("{}", phone), "***REDACTED***");
///
/// assert_eq!(phone.expose(), &"+44 20 7946 0000");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

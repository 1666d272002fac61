//! Secret string wrapper for credentials.
//!
//! [`SecretString`] keeps passwords out of logs: Debug and Display are
//! redacted, the inner value is only reachable through [`SecretString::expose`],
//! and the memory is zeroed on drop.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The redaction placeholder used in all output.
pub const REDACTED: &str = "[REDACTED]";

/// A string that must never be logged.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    pub fn new(inner: impl Into<String>) -> Self {
        Self {
            inner: inner.into(),
        }
    }

    /// Explicitly access the inner value.
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl From<String> for SecretString {
    fn from(inner: String) -> Self {
        Self::new(inner)
    }
}

impl From<&str> for SecretString {
    fn from(inner: &str) -> Self {
        Self::new(inner)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretString").field(&REDACTED).finish()
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

//! Error handling foundation for the theme.
//!
//! This module provides the `Result` type alias using rootcause and the
//! error raised when a render payload cannot be read. Authentication and
//! validation failures are not errors here: the host reports them as
//! display data on the payload itself.

use rootcause::Report;
use std::fmt;

/// A Result type alias using rootcause's Report for error handling.
///
/// Each layer adds its own context via `.context()` as errors propagate.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

/// Errors from reading or writing a render payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The payload is not valid JSON or does not match the payload schema.
    Malformed { details: String },
    /// The payload could not be serialized back to JSON.
    Encoding { details: String },
    /// Mock overrides were not a JSON object.
    InvalidOverrides { details: String },
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { details } => {
                write!(f, "malformed render payload: {details}")
            }
            Self::Encoding { details } => {
                write!(f, "failed to encode render payload: {details}")
            }
            Self::InvalidOverrides { details } => {
                write!(f, "invalid payload overrides: {details}")
            }
        }
    }
}

impl std::error::Error for ContextError {}

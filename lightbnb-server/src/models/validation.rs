//! Validation error types

use std::fmt;

/// Validation error for request inputs
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Numeric field outside its accepted bounds (inclusive)
    OutOfRange { field: &'static str, min: i64, max: i64 },

    /// String doesn't parse as the expected type
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

//! Validation error types

use std::fmt;

/// Validation error for form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field was not submitted at all
    Missing { field: &'static str },

    /// Field is empty (or whitespace) when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't parse (e.g., a timestamp or an integer)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Number is below the allowed minimum
    OutOfRange { field: &'static str, min: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, min } => {
                write!(f, "{} must be at least {}", field, min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field is NaN or infinite
    NotFinite { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::NotFinite { field } => write!(f, "{} must be a finite number", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::NotFinite { field: "latitude" };
        assert_eq!(err.to_string(), "latitude must be a finite number");

        let err = ValidationError::TooLong {
            field: "message",
            max: 4096,
        };
        assert_eq!(
            err.to_string(),
            "message exceeds maximum length of 4096 characters"
        );
    }
}

//! # Error Types
//!
//! Validation errors for bistro-core.
//!
//! The billing pipeline itself is total: `compute` and `render` accept any
//! order/menu shape and never fail. Errors exist only at the input edge,
//! where front ends validate names, prices, and quantities before they
//! reach the core.

use thiserror::Error;

/// Input validation errors.
///
/// Raised by the validators in [`crate::validation`] and surfaced by front
/// ends as user-facing messages. Errors are enum variants with context,
/// never bare strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative (zero is allowed, e.g. free items).
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a price that does not parse as a decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "item name".to_string(),
        };
        assert_eq!(err.to_string(), "item name is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }
}

//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  calc-core errors (this file)                                          │
//! │  ├── CalcError        - Arithmetic / dispatch failures                 │
//! │  └── ValidationError  - Malformed or missing input tokens              │
//! │                                                                         │
//! │  calc-cli errors (app crate)                                           │
//! │  └── CliError         - What the user sees (plus I/O and config)       │
//! │                                                                         │
//! │  Flow: ValidationError → CalcError → CliError → stdout + exit 1        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Display strings are the exact text printed to the user
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Calc Error
// =============================================================================

/// Calculator errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The operation selector is not one of 1, 2, 3, 4.
    ///
    /// Detected before any arithmetic runs.
    #[error("Invalid choice.")]
    InvalidSelector(i64),

    /// Divisor compared exactly equal to zero.
    ///
    /// ## User Workflow
    /// ```text
    /// a = 6, b = 0, choice = 4
    ///      │
    ///      ▼
    /// Calculator::divide(6, 0)
    ///      │
    ///      ▼
    /// DivisionByZero
    ///      │
    ///      ▼
    /// stdout: "Error: Division by zero", exit 1
    /// ```
    #[error("Division by zero")]
    DivisionByZero,

    /// Input could not be turned into an operand or selector.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while converting raw input tokens, before any dispatch happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input ended before the value was provided.
    #[error("{field} is required")]
    Required { field: String },

    /// Token is present but not acceptable.
    #[error("{field} '{value}' {reason}")]
    InvalidFormat {
        field: String,
        value: String,
        reason: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(CalcError::InvalidSelector(9).to_string(), "Invalid choice.");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "first number".to_string(),
        };
        assert_eq!(err.to_string(), "first number is required");

        let err = ValidationError::InvalidFormat {
            field: "second number".to_string(),
            value: "abc".to_string(),
            reason: "is not a number".to_string(),
        };
        assert_eq!(err.to_string(), "second number 'abc' is not a number");
    }

    #[test]
    fn test_validation_converts_to_calc_error() {
        let validation_err = ValidationError::Required {
            field: "choice".to_string(),
        };
        let calc_err: CalcError = validation_err.into();
        assert!(matches!(calc_err, CalcError::Validation(_)));
        assert_eq!(calc_err.to_string(), "Invalid input: choice is required");
    }
}

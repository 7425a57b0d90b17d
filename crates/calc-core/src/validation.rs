//! # Validation Module
//!
//! Converts raw input tokens into operands and selectors.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Pipeline                                     │
//! │                                                                         │
//! │  Layer 1: Token reader (calc-cli)                                      │
//! │  └── Whitespace tokenization, end-of-input detection                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Operand must parse as a finite f64                                │
//! │  └── Selector must parse as an i64                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Operation::from_selector                                     │
//! │  └── Selector must be 1..=4                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::validation::{parse_operand, parse_selector};
//!
//! assert_eq!(parse_operand("first number", "6").unwrap(), 6.0);
//! assert_eq!(parse_selector("4").unwrap(), 4);
//! assert!(parse_operand("first number", "six").is_err());
//! ```

use std::num::IntErrorKind;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field name used for the operation selector in messages.
pub const SELECTOR_FIELD: &str = "choice";

/// Parses an operand token.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must parse as `f64` (`6`, `-2.5`, `1e3`, `.5`)
/// - Must be finite: `inf` and `NaN` are rejected
pub fn parse_operand(field: &str, token: &str) -> ValidationResult<f64> {
    let token = token.trim();

    if token.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value: f64 = token.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        value: token.to_string(),
        reason: "is not a number".to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            value: token.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(value)
}

/// Parses the operation selector token.
///
/// Only the integer form is checked here. Whether the number names a real
/// operation is decided by [`crate::Operation::from_selector`], so that an
/// out-of-range choice reports `Invalid choice.` rather than a format error.
/// Integers too large for `i64` saturate to `i64::MAX` / `i64::MIN`, which
/// are out of range like any other unknown choice.
///
/// ## Example
/// ```rust
/// use calc_core::validation::parse_selector;
///
/// assert_eq!(parse_selector("9").unwrap(), 9);
/// assert_eq!(parse_selector("99999999999999999999").unwrap(), i64::MAX);
/// assert!(parse_selector("1.5").is_err());
/// ```
pub fn parse_selector(token: &str) -> ValidationResult<i64> {
    let token = token.trim();

    if token.is_empty() {
        return Err(ValidationError::Required {
            field: SELECTOR_FIELD.to_string(),
        });
    }

    match token.parse::<i64>() {
        Ok(selector) => Ok(selector),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ValidationError::InvalidFormat {
                field: SELECTOR_FIELD.to_string(),
                value: token.to_string(),
                reason: "is not a whole number".to_string(),
            }),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

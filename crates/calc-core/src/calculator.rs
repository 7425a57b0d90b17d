//! # Calculator Module
//!
//! The four arithmetic operations over two `f64` operands.
//!
//! ## Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PLAIN IEEE-754                                                         │
//! │                                                                         │
//! │    add(a, b)      = a + b                                               │
//! │    subtract(a, b) = a - b                                               │
//! │    multiply(a, b) = a * b                                               │
//! │    divide(a, b)   = a / b        (b == 0.0 → DivisionByZero)            │
//! │                                                                         │
//! │  No rounding, no epsilon. 0.1 + 0.2 is 0.30000000000000004 here;        │
//! │  making that look like 0.3 is the formatter's job.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::calculator::Calculator;
//!
//! let calc = Calculator;
//! assert_eq!(calc.add(6.0, 3.0), 9.0);
//! assert!(calc.divide(6.0, 0.0).is_err());
//! ```

use crate::error::{CalcError, CalcResult};
use crate::operation::Operation;

// =============================================================================
// Calculator
// =============================================================================

/// Stateless calculator.
///
/// A unit struct so callers hold "a calculator" the way the driver does,
/// while every method stays a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Returns `a + b`.
    #[inline]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// Returns `a - b`.
    #[inline]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// Returns `a * b`.
    #[inline]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Returns `a / b`.
    ///
    /// ## Errors
    /// [`CalcError::DivisionByZero`] when `b == 0.0`. The comparison is exact,
    /// so `-0.0` is rejected too and `1e-300` is not.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::{Calculator, CalcError};
    ///
    /// assert_eq!(Calculator.divide(6.0, 3.0), Ok(2.0));
    /// assert_eq!(Calculator.divide(6.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Runs `operation` on the two operands.
    ///
    /// ## User Workflow
    /// ```text
    /// Choice: 3
    ///      │
    ///      ▼
    /// Operation::from_selector(3) → Multiply
    ///      │
    ///      ▼
    /// apply(Multiply, a, b) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Result: a * b
    /// ```
    pub fn apply(&self, operation: Operation, a: f64, b: f64) -> CalcResult<f64> {
        match operation {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[(f64, f64)] = &[
        (6.0, 3.0),
        (0.1, 0.2),
        (-7.5, 2.25),
        (1e300, 1e10),
        (-0.0, 5.0),
        (123456.789, -0.001),
    ];

    #[test]
    fn test_add_subtract_multiply_match_ieee() {
        let calc = Calculator;
        for &(a, b) in SAMPLES {
            assert_eq!(calc.add(a, b).to_bits(), (a + b).to_bits());
            assert_eq!(calc.subtract(a, b).to_bits(), (a - b).to_bits());
            assert_eq!(calc.multiply(a, b).to_bits(), (a * b).to_bits());
        }
    }

    #[test]
    fn test_floating_point_is_not_rounded() {
        assert_eq!(Calculator.add(0.1, 0.2), 0.30000000000000004);
    }

    #[test]
    fn test_divide() {
        let calc = Calculator;
        assert_eq!(calc.divide(6.0, 3.0), Ok(2.0));
        assert_eq!(calc.divide(1.0, 4.0), Ok(0.25));
        for &(a, b) in SAMPLES {
            assert_eq!(calc.divide(a, b), Ok(a / b));
        }
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = Calculator;
        assert_eq!(calc.divide(6.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(calc.divide(0.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(calc.divide(-1.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_tiny_is_allowed() {
        // Exact comparison: no epsilon band around zero
        assert!(Calculator.divide(1.0, 1e-300).is_ok());
    }

    #[test]
    fn test_apply_routes_each_operation() {
        let calc = Calculator;
        assert_eq!(calc.apply(Operation::Add, 6.0, 3.0), Ok(9.0));
        assert_eq!(calc.apply(Operation::Subtract, 6.0, 3.0), Ok(3.0));
        assert_eq!(calc.apply(Operation::Multiply, 6.0, 3.0), Ok(18.0));
        assert_eq!(calc.apply(Operation::Divide, 6.0, 3.0), Ok(2.0));
        assert_eq!(
            calc.apply(Operation::Divide, 6.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }
}

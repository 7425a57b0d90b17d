//! # Result Formatting
//!
//! Renders a computed `f64` for the `Result: <value>` line.
//!
//! ## Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GENERAL (default)            SHORTEST                                  │
//! │  ─────────────────            ────────                                  │
//! │  %g-style, N significant      Rust `Display`, shortest string that      │
//! │  digits, zeros trimmed        round-trips to the same f64               │
//! │                                                                         │
//! │   6 / 3   → 2                  → 2                                      │
//! │   1 / 3   → 0.333333           → 0.3333333333333333                     │
//! │   0.1+0.2 → 0.3                → 0.30000000000000004                    │
//! │   1e20    → 1e+20              → 100000000000000000000                  │
//! │   1234567 → 1.23457e+06        → 1234567                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::{DEFAULT_PRECISION, MAX_PRECISION};

// =============================================================================
// Number Format
// =============================================================================

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Significant-digit output with trailing zeros removed.
    #[default]
    General,

    /// Shortest round-trip representation.
    Shortest,
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormat::General => write!(f, "general"),
            NumberFormat::Shortest => write!(f, "shortest"),
        }
    }
}

impl FromStr for NumberFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" | "g" => Ok(NumberFormat::General),
            "shortest" | "exact" => Ok(NumberFormat::Shortest),
            other => Err(ValidationError::InvalidFormat {
                field: "number_format".to_string(),
                value: other.to_string(),
                reason: "must be one of: general, shortest".to_string(),
            }),
        }
    }
}

// =============================================================================
// Result Formatter
// =============================================================================

/// Formats results according to a [`NumberFormat`] and precision.
///
/// ## Example
/// ```rust
/// use calc_core::{NumberFormat, ResultFormatter};
///
/// let general = ResultFormatter::default();
/// assert_eq!(general.format(1.0 / 3.0), "0.333333");
///
/// let shortest = ResultFormatter::new(NumberFormat::Shortest, 6);
/// assert_eq!(shortest.format(1.0 / 3.0), "0.3333333333333333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultFormatter {
    format: NumberFormat,
    precision: usize,
}

impl ResultFormatter {
    /// Creates a formatter. Precision is clamped to `1..=17`.
    pub fn new(format: NumberFormat, precision: usize) -> Self {
        ResultFormatter {
            format,
            precision: precision.clamp(1, MAX_PRECISION),
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Renders `value`.
    pub fn format(&self, value: f64) -> String {
        match self.format {
            NumberFormat::General => format_general(value, self.precision),
            NumberFormat::Shortest => value.to_string(),
        }
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        ResultFormatter::new(NumberFormat::General, DEFAULT_PRECISION)
    }
}

/// `%g`-style formatting with `precision` significant digits.
///
/// Fixed notation when the decimal exponent `x` satisfies
/// `-4 <= x < precision`, scientific (`1.5e+07`) otherwise. Trailing zeros
/// in the fraction are dropped, and so is a bare trailing `.`.
fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // Rounding to `precision` digits first gives the exponent %g would use
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn general(value: f64) -> String {
        ResultFormatter::default().format(value)
    }

    #[test]
    fn test_general_integers() {
        assert_eq!(general(9.0), "9");
        assert_eq!(general(2.0), "2");
        assert_eq!(general(-18.0), "-18");
        assert_eq!(general(123456.0), "123456");
    }

    #[test]
    fn test_general_fractions() {
        assert_eq!(general(1.0 / 3.0), "0.333333");
        assert_eq!(general(0.1 + 0.2), "0.3");
        assert_eq!(general(2.5), "2.5");
        assert_eq!(general(0.0001), "0.0001");
        assert_eq!(general(-0.125), "-0.125");
    }

    #[test]
    fn test_general_scientific() {
        assert_eq!(general(1e20), "1e+20");
        assert_eq!(general(1234567.0), "1.23457e+06");
        assert_eq!(general(0.00001), "1e-05");
        assert_eq!(general(-2.5e-7), "-2.5e-07");
        assert_eq!(general(1.5e300), "1.5e+300");
    }

    #[test]
    fn test_general_rounding_bumps_exponent() {
        // 999999.5 rounds to 1.00000e6 at six digits
        assert_eq!(general(999999.5), "1e+06");
    }

    #[test]
    fn test_general_special_values() {
        assert_eq!(general(0.0), "0");
        assert_eq!(general(-0.0), "-0");
        assert_eq!(general(f64::INFINITY), "inf");
        assert_eq!(general(f64::NEG_INFINITY), "-inf");
        assert_eq!(general(f64::NAN), "nan");
    }

    #[test]
    fn test_general_custom_precision() {
        let formatter = ResultFormatter::new(NumberFormat::General, 10);
        assert_eq!(formatter.format(1.0 / 3.0), "0.3333333333");
        assert_eq!(formatter.format(1234567.0), "1234567");

        let formatter = ResultFormatter::new(NumberFormat::General, 1);
        assert_eq!(formatter.format(27.0), "3e+01");
    }

    #[test]
    fn test_precision_is_clamped() {
        assert_eq!(ResultFormatter::new(NumberFormat::General, 0).precision(), 1);
        assert_eq!(
            ResultFormatter::new(NumberFormat::General, 40).precision(),
            MAX_PRECISION
        );
    }

    #[test]
    fn test_shortest() {
        let formatter = ResultFormatter::new(NumberFormat::Shortest, DEFAULT_PRECISION);
        assert_eq!(formatter.format(9.0), "9");
        assert_eq!(formatter.format(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_number_format_parsing() {
        assert_eq!("general".parse::<NumberFormat>().unwrap(), NumberFormat::General);
        assert_eq!("SHORTEST".parse::<NumberFormat>().unwrap(), NumberFormat::Shortest);
        assert!("fancy".parse::<NumberFormat>().is_err());
        assert_eq!(NumberFormat::Shortest.to_string(), "shortest");
    }
}

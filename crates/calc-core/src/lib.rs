//! # calc-core: Pure Arithmetic for Calc
//!
//! This crate holds everything the calculator computes, with zero I/O.
//! The interactive driver in `apps/calc-cli` reads tokens, hands them to
//! this crate, and prints whatever comes back.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Calc Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    calc-cli (bin: calc)                         │   │
//! │  │    prompt ──► read token ──► dispatch ──► print ──► exit code   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌───────────┐ ┌────────────┐ ┌────────────┐  │   │
//! │  │   │ calculator │ │ operation │ │ validation │ │   format   │  │   │
//! │  │   │ add / sub  │ │ selector  │ │  operands  │ │  %g-style  │  │   │
//! │  │   │ mul / div  │ │   1..=4   │ │  selector  │ │  shortest  │  │   │
//! │  │   └────────────┘ └───────────┘ └────────────┘ └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The four arithmetic operations
//! - [`operation`] - Operation selector (1 = Add ... 4 = Divide)
//! - [`validation`] - Parsing of raw input tokens
//! - [`format`] - Rendering of results
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{Calculator, Operation, ResultFormatter};
//!
//! let op = Operation::from_selector(4).unwrap();
//! let result = Calculator.apply(op, 6.0, 3.0).unwrap();
//!
//! assert_eq!(ResultFormatter::default().format(result), "2");
//! ```

pub mod calculator;
pub mod error;
pub mod format;
pub mod operation;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::Calculator;
pub use error::{CalcError, CalcResult, ValidationError};
pub use format::{NumberFormat, ResultFormatter};
pub use operation::Operation;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Significant digits used by the default result format.
///
/// Matches the default precision of C-style `%g` output, which is what the
/// calculator has always printed (`1/3` shows as `0.333333`).
pub const DEFAULT_PRECISION: usize = 6;

/// Largest useful precision for an `f64` (17 significant digits round-trip).
pub const MAX_PRECISION: usize = 17;

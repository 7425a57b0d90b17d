//! # Operation Selector
//!
//! Maps the numeric menu choice to an arithmetic operation.
//!
//! ## Menu
//! ```text
//! ┌───────────────────────────┐
//! │  Choose operation:        │
//! │  1. Add       → Add       │
//! │  2. Subtract  → Subtract  │
//! │  3. Multiply  → Multiply  │
//! │  4. Divide    → Divide    │
//! │  Choice: _                │
//! │                           │
//! │  anything else → InvalidSelector
//! └───────────────────────────┘
//! ```

use std::fmt;

use crate::error::{CalcError, CalcResult};

/// One of the four arithmetic operations, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Resolves a menu selector.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::{CalcError, Operation};
    ///
    /// assert_eq!(Operation::from_selector(1), Ok(Operation::Add));
    /// assert_eq!(Operation::from_selector(4), Ok(Operation::Divide));
    /// assert_eq!(Operation::from_selector(9), Err(CalcError::InvalidSelector(9)));
    /// ```
    pub fn from_selector(selector: i64) -> CalcResult<Self> {
        match selector {
            1 => Ok(Operation::Add),
            2 => Ok(Operation::Subtract),
            3 => Ok(Operation::Multiply),
            4 => Ok(Operation::Divide),
            other => Err(CalcError::InvalidSelector(other)),
        }
    }

    /// The menu number of this operation.
    pub const fn selector(&self) -> i64 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
            Operation::Divide => 4,
        }
    }

    /// Menu label.
    pub const fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    /// Arithmetic symbol, used in log output.
    pub const fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// The full menu prompt, ending in `"Choice: "`.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::Operation;
    ///
    /// assert_eq!(
    ///     Operation::menu(),
    ///     "Choose operation:\n1. Add\n2. Subtract\n3. Multiply\n4. Divide\nChoice: "
    /// );
    /// ```
    pub fn menu() -> String {
        let mut menu = String::from("Choose operation:\n");
        for op in Self::ALL {
            menu.push_str(&format!("{}. {}\n", op.selector(), op.label()));
        }
        menu.push_str("Choice: ");
        menu
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

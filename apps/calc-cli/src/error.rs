//! Error types for the calculator CLI.

use calc_core::CalcError;

use crate::config::ConfigError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can end a session early.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// The line shown to the user on stdout.
    ///
    /// ```text
    /// InvalidSelector → "Invalid choice."
    /// DivisionByZero  → "Error: Division by zero"
    /// Validation      → "Error: Invalid input: <detail>"
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            CliError::Calc(err @ CalcError::InvalidSelector(_)) => err.to_string(),
            other => format!("Error: {}", other),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

//! # Interactive Session
//!
//! One pass through the calculator: prompt, read, dispatch, print.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "Simple Calculator"          (unless show_banner = false)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Enter first number: "  ──► parse_operand ──┐                          │
//! │  "Enter second number: " ──► parse_operand ──┤                          │
//! │  menu + "Choice: "       ──► parse_selector ─┤                          │
//! │                                              ▼                          │
//! │                           Operation::from_selector                      │
//! │                              │            │                             │
//! │                              │ 1..=4      └─► "Invalid choice."  exit 1 │
//! │                              ▼                                          │
//! │                        Calculator::apply                                │
//! │                              │            │                             │
//! │                              │ Ok         └─► "Error: Division by zero" │
//! │                              ▼                                 exit 1   │
//! │                     "Result: <value>"  exit 0                           │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                     optional result delay                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use calc_core::validation::{parse_operand, parse_selector, SELECTOR_FIELD};
use calc_core::{CalcError, Calculator, Operation, ResultFormatter, ValidationError};
use tracing::{debug, error, warn};

use crate::config::CalcConfig;
use crate::error::{CliError, CliResult};
use crate::input::TokenReader;

pub const BANNER: &str = "Simple Calculator";
pub const FIRST_PROMPT: &str = "Enter first number: ";
pub const SECOND_PROMPT: &str = "Enter second number: ";

const FIRST_FIELD: &str = "first number";
const SECOND_FIELD: &str = "second number";

/// A single calculator session over arbitrary input and output streams.
pub struct Session<'a, R, W> {
    config: &'a CalcConfig,
    calculator: Calculator,
    formatter: ResultFormatter,
    input: TokenReader<R>,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a CalcConfig, input: R, output: W) -> Self {
        Session {
            config,
            calculator: Calculator,
            formatter: config.formatter(),
            input: TokenReader::new(input),
            output,
        }
    }

    /// Runs the session and returns the computed result.
    ///
    /// The result line is written before returning. Failures are returned
    /// unprinted; see [`Session::report`].
    pub fn run(&mut self) -> CliResult<f64> {
        if self.config.display.show_banner {
            writeln!(self.output, "{}", BANNER)?;
        }

        let a = self.read_operand(FIRST_FIELD, FIRST_PROMPT)?;
        let b = self.read_operand(SECOND_FIELD, SECOND_PROMPT)?;

        self.prompt(&Operation::menu())?;
        let token = self.read_token(SELECTOR_FIELD)?;
        let selector = parse_selector(&token).map_err(CalcError::from)?;

        let operation = Operation::from_selector(selector).map_err(|e| {
            warn!(selector, "Invalid operation selector");
            e
        })?;

        debug!(a, b, op = %operation.symbol(), "Dispatching");
        let result = self.calculator.apply(operation, a, b).map_err(|e| {
            warn!(a, b, op = %operation, error = %e, "Calculation failed");
            e
        })?;

        writeln!(self.output, "Result: {}", self.formatter.format(result))?;
        self.output.flush()?;

        Ok(result)
    }

    /// Writes the user-facing line for `err`.
    pub fn report(&mut self, err: &CliError) -> io::Result<()> {
        writeln!(self.output, "{}", err.user_message())?;
        self.output.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn read_operand(&mut self, field: &str, prompt: &str) -> CliResult<f64> {
        self.prompt(prompt)?;
        let token = self.read_token(field)?;
        Ok(parse_operand(field, &token).map_err(CalcError::from)?)
    }

    fn read_token(&mut self, field: &str) -> CliResult<String> {
        match self.input.next_token()? {
            Some(token) => Ok(token),
            None => {
                debug!(field, "Input ended early");
                Err(CalcError::from(ValidationError::Required {
                    field: field.to_string(),
                })
                .into())
            }
        }
    }
}

/// Runs one full session and returns the process exit status.
///
/// On success the optional result delay is honored before returning.
pub fn run_interactive<R: BufRead, W: Write>(config: &CalcConfig, input: R, output: W) -> u8 {
    let mut session = Session::new(config, input, output);

    match session.run() {
        Ok(_) => {
            if let Some(delay) = config.result_delay() {
                debug!(?delay, "Pausing after result");
                std::thread::sleep(delay);
            }
            0
        }
        Err(err) => {
            if let Err(io_err) = session.report(&err) {
                error!(error = %io_err, "Failed to report error to user");
            }
            err.exit_code()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

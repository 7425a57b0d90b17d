//! # calc
//!
//! Simple interactive calculator.
//!
//! ## Usage
//! ```bash
//! $ calc
//! Simple Calculator
//! Enter first number: 6
//! Enter second number: 3
//! Choose operation:
//! 1. Add
//! 2. Subtract
//! 3. Multiply
//! 4. Divide
//! Choice: 4
//! Result: 2
//!
//! # Non-interactive
//! $ echo "6 0 4" | calc
//! ... Error: Division by zero      (exit 1)
//! ```

use std::io;
use std::process::ExitCode;

use calc_cli::{init_tracing, run_interactive, CalcConfig, CliError};
use tracing::info;

fn main() -> ExitCode {
    init_tracing();

    let config = match CalcConfig::load(None).map_err(CliError::from) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };
    info!(
        format = %config.display.number_format,
        precision = config.display.precision,
        delay_secs = config.session.result_delay_secs,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let code = run_interactive(&config, stdin.lock(), stdout.lock());

    ExitCode::from(code)
}

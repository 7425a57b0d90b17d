//! # Calc CLI
//!
//! Interactive driver for calc-core. The `calc` binary is a thin wrapper
//! around [`session::run_interactive`].
//!
//! ## Module Organization
//! ```text
//! calc_cli/
//! ├── lib.rs       ◄─── You are here (tracing setup, exports)
//! ├── config.rs    ◄─── calc.toml + CALC_* environment
//! ├── error.rs     ◄─── CliError, user-facing messages, exit codes
//! ├── input.rs     ◄─── Whitespace token reader
//! └── session.rs   ◄─── Prompt / read / dispatch / print
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod session;

use tracing_subscriber::EnvFilter;

pub use config::{CalcConfig, ConfigError};
pub use error::{CliError, CliResult};
pub use session::{run_interactive, Session};

/// Initializes tracing.
///
/// Logs go to stderr so the stdout transcript stays exactly what the user
/// sees. Default level is `warn`; override with `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

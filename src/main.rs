//! Hummingbird: local operator console for a deployment recipe directory.
//!
//! This is the main entry point for the `hummingbird` CLI. It parses
//! arguments, installs logging, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod conf;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
mod logging;
mod server;
pub mod settings;
pub mod store;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

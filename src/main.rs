//! Scrumhelper: template-driven agile artifact generator.
//!
//! This is the main entry point for the `scrumhelper` CLI. It loads `.env`,
//! parses arguments, sets up logging, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod client;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
mod logging;
pub mod task_type;
pub mod templates;

use cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already hold the key.
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(?err, "command failed");
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

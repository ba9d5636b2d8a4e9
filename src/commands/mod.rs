//! Command implementations for scrumhelper.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod generate;
mod prompt;
mod render;
mod session;
mod tasks;

use crate::cli::{Cli, Command};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Tasks => tasks::cmd_tasks(),
        Command::Template(args) => render::cmd_template(config_path, args),
        Command::Render(args) => render::cmd_render(config_path, args),
        Command::Generate(args) => generate::cmd_generate(config_path, args).await,
        Command::Session => session::cmd_session(config_path).await,
        Command::About => tasks::cmd_about(),
    }
}

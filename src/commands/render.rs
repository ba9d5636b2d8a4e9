//! Implementation of the `scrumhelper template` and `scrumhelper render`
//! commands. Neither touches the network.

use super::prompt::{load_registry, prepare_prompt};
use crate::cli::{RenderArgs, TemplateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::templates::placeholders;
use std::io::{self, Write};
use std::path::Path;

/// Execute the `scrumhelper template` command.
pub fn cmd_template(config_path: Option<&Path>, args: TemplateArgs) -> Result<()> {
    let config = Config::resolve(config_path)?;
    write_template(&config, &args, &mut io::stdout())
}

/// Execute the `scrumhelper render` command.
pub fn cmd_render(config_path: Option<&Path>, args: RenderArgs) -> Result<()> {
    let config = Config::resolve(config_path)?;
    write_rendered(&config, &args, &mut io::stdout())
}

fn write_template<W: Write>(config: &Config, args: &TemplateArgs, out: &mut W) -> Result<()> {
    let registry = load_registry(config)?;
    let template = registry.get_template(args.task);

    writeln!(out, "{}", template)?;
    if args.placeholders {
        let names = placeholders(template)?;
        if names.is_empty() {
            writeln!(out, "Placeholders: (none)")?;
        } else {
            writeln!(out, "Placeholders: {}", names.join(", "))?;
        }
    }
    Ok(())
}

fn write_rendered<W: Write>(config: &Config, args: &RenderArgs, out: &mut W) -> Result<()> {
    let prompt = prepare_prompt(config, args.task, &args.input, &args.template)?;
    writeln!(out, "{}", prompt)?;
    Ok(())
}

//! Implementation of the `scrumhelper tasks` and `scrumhelper about` commands.

use crate::error::Result;
use crate::task_type::TaskType;
use std::io::{self, Write};

/// Short description shown by `about` and at the start of a session.
pub const ABOUT: &str = "GenAI Assistant for Scaled Agile Framework with Jira Export.";

/// Execute the `scrumhelper tasks` command.
pub fn cmd_tasks() -> Result<()> {
    write_tasks(&mut io::stdout())
}

/// Execute the `scrumhelper about` command.
pub fn cmd_about() -> Result<()> {
    println!("{}", ABOUT);
    Ok(())
}

/// Print one line per task type.
pub fn write_tasks<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Task types:")?;
    for task_type in TaskType::ALL {
        let needs = if task_type.requires_input() {
            "needs context"
        } else {
            "no context"
        };
        writeln!(
            out,
            "  {:<20} {:<28} ({})",
            task_type.slug(),
            task_type.label(),
            needs
        )?;
    }
    Ok(())
}

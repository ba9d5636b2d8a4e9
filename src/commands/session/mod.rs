//! Implementation of the `scrumhelper session` command.
//!
//! A line-oriented session over stdin:
//! select a task type, optionally edit its template, enter context text,
//! then generate. Template edits live in the session's registry and are
//! dropped when the session ends.
//!
//! Errors are reported and the session carries on; only I/O failures on
//! the session's own streams end it.

mod parser;

#[cfg(test)]
mod tests;

use super::generate::write_generated;
use super::prompt::{check_input, load_registry};
use super::tasks::{ABOUT, write_tasks};
use crate::client::{GeminiClient, TextGenerator};
use crate::config::Config;
use crate::error::{Result, ScrumError};
use crate::task_type::TaskType;
use crate::templates::{TemplateRegistry, placeholders, render};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Lines, Write};
use std::path::Path;
use tracing::{debug, warn};

pub use parser::{HELP, SessionCommand, parse_line};

/// Line that ends a multi-line block.
const END_OF_BLOCK: &str = ".";

/// Execute the `scrumhelper session` command.
pub async fn cmd_session(config_path: Option<&Path>) -> Result<()> {
    let config = Config::resolve(config_path)?;
    let state = SessionState::new(load_registry(&config)?);
    let stdin = io::stdin();

    run_session(stdin.lock(), &mut io::stdout(), state, || {
        GeminiClient::from_config(&config)
    })
    .await
}

/// Mutable state of one session.
#[derive(Debug, Clone)]
pub struct SessionState {
    registry: TemplateRegistry,
    current: TaskType,
    inputs: BTreeMap<TaskType, String>,
}

impl SessionState {
    /// Start on the first task type with no context entered.
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            current: TaskType::ALL[0],
            inputs: BTreeMap::new(),
        }
    }

    pub fn current(&self) -> TaskType {
        self.current
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Render the prompt for the current task type.
    pub fn prompt(&self) -> Result<String> {
        let input = check_input(self.current, self.inputs.get(&self.current).cloned(), false)?;
        Ok(render(
            self.registry.get_template(self.current),
            input.as_deref(),
        )?)
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Drive a session until `quit` or end of input.
///
/// `connect` is called for every `generate`, so a missing credential is
/// reported per attempt instead of ending the session.
pub async fn run_session<R, W, G, F>(
    input: R,
    out: &mut W,
    mut state: SessionState,
    connect: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: TextGenerator,
    F: Fn() -> Result<G>,
{
    writeln!(out, "{}", ABOUT)?;
    writeln!(out, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "[{}]> ", state.current().slug())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let outcome = match parse_line(&line) {
            Ok(command) => execute(command, &mut state, &mut lines, out, &connect).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(ScrumError::Io(e)) => return Err(ScrumError::Io(e)),
            Err(e) => {
                warn!("session command failed: {}", e);
                writeln!(out, "Error: {}", e)?;
            }
        }
    }

    debug!("session ended");
    Ok(())
}

async fn execute<R, W, G, F>(
    command: SessionCommand,
    state: &mut SessionState,
    lines: &mut Lines<R>,
    out: &mut W,
    connect: &F,
) -> Result<Flow>
where
    R: BufRead,
    W: Write,
    G: TextGenerator,
    F: Fn() -> Result<G>,
{
    match command {
        SessionCommand::Empty => {}
        SessionCommand::Tasks => write_tasks(out)?,
        SessionCommand::Use(task_type) => {
            state.current = task_type;
            writeln!(out, "Selected: {}", task_type)?;
            if task_type.requires_input() && !state.inputs.contains_key(&task_type) {
                writeln!(out, "{} Use `input` to enter it.", task_type.input_prompt())?;
            }
        }
        SessionCommand::Show => {
            let registry = state.registry();
            let template = registry.get_template(state.current);
            let modified = if registry.is_modified(state.current) {
                " (edited)"
            } else {
                ""
            };
            writeln!(out, "Template for {}{}:", state.current, modified)?;
            writeln!(out, "{}", template)?;
            match placeholders(template) {
                Ok(names) if names.is_empty() => writeln!(out, "Placeholders: (none)")?,
                Ok(names) => writeln!(out, "Placeholders: {}", names.join(", "))?,
                Err(e) => writeln!(out, "Warning: {}", e)?,
            }
        }
        SessionCommand::Edit => {
            writeln!(
                out,
                "Enter the new template for {}; end with a line containing only `{}`:",
                state.current, END_OF_BLOCK
            )?;
            let text = read_block(lines)?;
            state.registry.set_template(state.current, text);
            writeln!(out, "Template updated for this session.")?;
        }
        SessionCommand::Reset => {
            state.registry.reset(state.current);
            writeln!(out, "Template restored to the built-in default.")?;
        }
        SessionCommand::Input => {
            if !state.current.requires_input() {
                return Err(ScrumError::UserError(format!(
                    "{} takes no context",
                    state.current
                )));
            }
            writeln!(
                out,
                "{} (end with a line containing only `{}`)",
                state.current.input_prompt(),
                END_OF_BLOCK
            )?;
            let text = read_block(lines)?;
            state.inputs.insert(state.current, text);
        }
        SessionCommand::Render => {
            let prompt = state.prompt()?;
            writeln!(out, "{}", prompt)?;
        }
        SessionCommand::Generate => {
            let prompt = state.prompt()?;
            let generator = connect()?;
            writeln!(out, "Generating...")?;
            out.flush()?;
            let text = generator.generate(&prompt).await?;
            write_generated(out, &text)?;
        }
        SessionCommand::About => writeln!(out, "{}", ABOUT)?,
        SessionCommand::Help => writeln!(out, "{}", HELP)?,
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Read lines up to a lone `.` (or end of input) and join them.
fn read_block<R: BufRead>(lines: &mut Lines<R>) -> Result<String> {
    let mut block: Vec<String> = Vec::new();
    for line in lines.by_ref() {
        let line = line?;
        if line.trim_end() == END_OF_BLOCK {
            break;
        }
        block.push(line);
    }
    Ok(block.join("\n"))
}

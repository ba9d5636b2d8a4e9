//! Parsing of session command lines.

use crate::error::{Result, ScrumError};
use crate::task_type::TaskType;

/// A single line entered in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Blank line.
    Empty,
    Tasks,
    Use(TaskType),
    Show,
    Edit,
    Reset,
    Input,
    Render,
    Generate,
    About,
    Help,
    Quit,
}

/// Help text listing session commands.
pub const HELP: &str = "\
Commands:
  tasks          list task types
  use <task>     select a task type (e.g. `use user-stories`, `use dor`)
  show           show the current template
  edit           replace the current template (finish with a line containing only `.`)
  reset          restore the built-in template
  input          enter the context text (finish with a line containing only `.`)
  render         print the rendered prompt
  generate       send the prompt and print the generated text
  about          what this tool is for
  help           this list
  quit           end the session";

/// Parse one line of session input.
pub fn parse_line(line: &str) -> Result<SessionCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => SessionCommand::Empty,
        "tasks" | "list" => SessionCommand::Tasks,
        "use" | "task" => {
            if rest.is_empty() {
                return Err(ScrumError::UserError(
                    "`use` needs a task type (see `tasks`)".to_string(),
                ));
            }
            let task_type = rest
                .parse::<TaskType>()
                .map_err(|e| ScrumError::UserError(e.to_string()))?;
            SessionCommand::Use(task_type)
        }
        "show" | "template" => SessionCommand::Show,
        "edit" => SessionCommand::Edit,
        "reset" => SessionCommand::Reset,
        "input" | "context" => SessionCommand::Input,
        "render" | "prompt" => SessionCommand::Render,
        "generate" | "gen" => SessionCommand::Generate,
        "about" => SessionCommand::About,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => {
            return Err(ScrumError::UserError(format!(
                "unknown command '{}' (type `help` for a list)",
                other
            )));
        }
    };

    if !rest.is_empty() && !matches!(command, SessionCommand::Use(_)) {
        return Err(ScrumError::UserError(format!(
            "`{}` takes no arguments",
            word
        )));
    }

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_line("generate").unwrap(), SessionCommand::Generate);
        assert_eq!(parse_line("  SHOW ").unwrap(), SessionCommand::Show);
        assert_eq!(parse_line("q").unwrap(), SessionCommand::Quit);
        assert_eq!(parse_line("").unwrap(), SessionCommand::Empty);
    }

    #[test]
    fn use_takes_label_with_spaces() {
        assert_eq!(
            parse_line("use Definition of Done (DoD)").unwrap(),
            SessionCommand::Use(TaskType::DefinitionOfDone)
        );
        assert_eq!(
            parse_line("use   acceptance-criteria").unwrap(),
            SessionCommand::Use(TaskType::AcceptanceCriteria)
        );
    }

    #[test]
    fn use_without_task_is_error() {
        assert!(parse_line("use").is_err());
    }

    #[test]
    fn use_unknown_task_is_error() {
        let err = parse_line("use retro").unwrap_err();
        assert!(err.to_string().contains("unknown task type 'retro'"));
    }

    #[test]
    fn unknown_command_is_error() {
        let err = parse_line("deploy").unwrap_err();
        assert!(err.to_string().contains("unknown command 'deploy'"));
    }

    #[test]
    fn extra_arguments_rejected() {
        assert!(parse_line("render now").is_err());
    }
}

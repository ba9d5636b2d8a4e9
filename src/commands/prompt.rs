//! Shared steps for turning CLI arguments into a rendered prompt.
//!
//! Every command that needs a prompt goes through the same steps: config
//! templates, an optional one-off template override, input checks, then
//! rendering.

use crate::cli::{InputArgs, TemplateOverrideArgs};
use crate::config::Config;
use crate::error::{Result, ScrumError};
use crate::task_type::TaskType;
use crate::templates::{TemplateRegistry, render};
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Default templates overlaid with the config file's templates.
pub fn load_registry(config: &Config) -> Result<TemplateRegistry> {
    let overrides = config.template_overrides()?;
    for (task_type, _) in &overrides {
        debug!(task = %task_type, "using template from config");
    }
    Ok(TemplateRegistry::default().with_overrides(overrides))
}

/// Apply a `--template` / `--template-file` override for one task type.
pub fn apply_template_override(
    registry: TemplateRegistry,
    task_type: TaskType,
    args: &TemplateOverrideArgs,
) -> Result<TemplateRegistry> {
    if let Some(text) = &args.template {
        return Ok(registry.with_template(task_type, text.as_str()));
    }
    if let Some(path) = &args.template_file {
        let text = read_text(path, "template")?;
        return Ok(registry.with_template(task_type, text));
    }
    Ok(registry)
}

/// Read the context text named by `--input` / `--input-file`, if any.
pub fn read_input(args: &InputArgs) -> Result<Option<String>> {
    if let Some(text) = &args.input {
        return Ok(Some(text.clone()));
    }
    match &args.input_file {
        Some(path) => read_text(path, "input").map(Some),
        None => Ok(None),
    }
}

/// Decide which context text, if any, goes into the template.
///
/// Definition task types never take input. Input-driven task types refuse
/// blank input unless `allow_empty` is set.
pub fn check_input(
    task_type: TaskType,
    input: Option<String>,
    allow_empty: bool,
) -> Result<Option<String>> {
    if !task_type.requires_input() {
        if input.is_some() {
            warn!(task = %task_type, "task type takes no context; ignoring input");
        }
        return Ok(None);
    }

    match input {
        Some(text) if !text.trim().is_empty() => Ok(Some(text)),
        other if allow_empty => Ok(Some(other.unwrap_or_default())),
        _ => Err(ScrumError::UserError(format!(
            "{} needs context text. {}\n\n\
             Pass it with --input or --input-file (use --allow-empty to send it blank).",
            task_type,
            task_type.input_prompt()
        ))),
    }
}

/// Run every step and return the rendered prompt.
pub fn prepare_prompt(
    config: &Config,
    task_type: TaskType,
    input: &InputArgs,
    template: &TemplateOverrideArgs,
) -> Result<String> {
    let registry = apply_template_override(load_registry(config)?, task_type, template)?;
    let input_text = check_input(task_type, read_input(input)?, input.allow_empty)?;
    let prompt = render(registry.get_template(task_type), input_text.as_deref())?;
    debug!(task = %task_type, prompt_chars = prompt.chars().count(), "rendered prompt");
    Ok(prompt)
}

/// Read a whole text file, or stdin when `path` is `-`. Trailing line
/// breaks are dropped.
fn read_text(path: &Path, what: &str) -> Result<String> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            ScrumError::UserError(format!(
                "failed to read {} file '{}': {}",
                what,
                path.display(),
                e
            ))
        })?
    };
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::default_template;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn input(text: &str) -> InputArgs {
        InputArgs {
            input: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn user_stories_prompt_contains_context() {
        let prompt = prepare_prompt(
            &Config::default(),
            TaskType::UserStories,
            &input("a mobile banking app"),
            &TemplateOverrideArgs::default(),
        )
        .unwrap();

        assert!(prompt.contains("\"a mobile banking app\""));
        assert!(prompt.contains("generate detailed user stories"));
    }

    #[test]
    fn dor_needs_no_input_and_renders_verbatim() {
        let prompt = prepare_prompt(
            &Config::default(),
            TaskType::DefinitionOfReady,
            &InputArgs::default(),
            &TemplateOverrideArgs::default(),
        )
        .unwrap();

        assert_eq!(prompt, default_template(TaskType::DefinitionOfReady));
    }

    #[test]
    fn missing_input_blocks_input_driven_types() {
        let err = prepare_prompt(
            &Config::default(),
            TaskType::AcceptanceCriteria,
            &InputArgs::default(),
            &TemplateOverrideArgs::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ScrumError::UserError(_)));
        assert!(err.to_string().contains("Provide the acceptance criteria context:"));
    }

    #[test]
    fn blank_input_blocked_unless_allowed() {
        assert!(check_input(TaskType::ProductBacklog, Some("  \n".to_string()), false).is_err());
        assert_eq!(
            check_input(TaskType::ProductBacklog, None, true).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn definition_types_ignore_input() {
        assert_eq!(
            check_input(TaskType::DefinitionOfDone, Some("extra".to_string()), false).unwrap(),
            None
        );
    }

    #[test]
    fn config_template_overrides_default() {
        let mut config = Config::default();
        config
            .templates
            .insert("user_stories".to_string(), "Stories: {input_text}".to_string());

        let prompt = prepare_prompt(
            &config,
            TaskType::UserStories,
            &input("checkout"),
            &TemplateOverrideArgs::default(),
        )
        .unwrap();
        assert_eq!(prompt, "Stories: checkout");
    }

    #[test]
    fn cli_template_beats_config_template() {
        let mut config = Config::default();
        config
            .templates
            .insert("dod".to_string(), "Config DoD".to_string());

        let prompt = prepare_prompt(
            &config,
            TaskType::DefinitionOfDone,
            &InputArgs::default(),
            &TemplateOverrideArgs {
                template: Some("CLI DoD".to_string()),
                template_file: None,
            },
        )
        .unwrap();
        assert_eq!(prompt, "CLI DoD");
    }

    #[test]
    fn files_supply_template_and_input() {
        let temp = TempDir::new().unwrap();
        let template_path = temp.path().join("ac.tmpl");
        let input_path = temp.path().join("story.txt");
        std::fs::write(&template_path, "Criteria for: {input_text}\n").unwrap();
        std::fs::write(&input_path, "As a user, I want to log in.\n").unwrap();

        let prompt = prepare_prompt(
            &Config::default(),
            TaskType::AcceptanceCriteria,
            &InputArgs {
                input_file: Some(input_path),
                ..Default::default()
            },
            &TemplateOverrideArgs {
                template: None,
                template_file: Some(template_path),
            },
        )
        .unwrap();
        assert_eq!(prompt, "Criteria for: As a user, I want to log in.");
    }

    #[test]
    fn missing_input_file_is_user_error() {
        let err = read_input(&InputArgs {
            input_file: Some(PathBuf::from("/definitely/not/here.txt")),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
    }

    #[test]
    fn broken_template_is_template_error() {
        let err = prepare_prompt(
            &Config::default(),
            TaskType::UserStories,
            &input("x"),
            &TemplateOverrideArgs {
                template: Some("Stories for {input_text".to_string()),
                template_file: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ScrumError::TemplateError(_)));
    }
}

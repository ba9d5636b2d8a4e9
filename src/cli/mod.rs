//! CLI argument parsing for scrumhelper.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::task_type::TaskType;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Scrumhelper: generate agile artifacts from prompt templates.
///
/// Pick a task type (product backlog, user stories, acceptance criteria,
/// Definition of Ready, Definition of Done), give it some context, and
/// let a hosted generative-language model write the artifact.
///
/// The API key is read from GEMINI_API_KEY (or the variable named by
/// `api_key_env` in the config); a `.env` file in the working directory
/// is honoured.
#[derive(Parser, Debug)]
#[command(name = "scrumhelper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file (default: ./scrumhelper.yaml if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for scrumhelper.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available task types.
    ///
    /// Shows each task type's identifier and whether it needs context text.
    Tasks,

    /// Print the current template for a task type.
    ///
    /// Includes overrides from the config file.
    Template(TemplateArgs),

    /// Render the prompt for a task type without calling the service.
    Render(RenderArgs),

    /// Render the prompt and generate the artifact.
    ///
    /// Sends one request to the generative-language service and prints
    /// the returned text.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Interactive session with editable templates.
    ///
    /// Reads commands from stdin. Template edits last until the session
    /// ends and are never saved.
    Session,

    /// Show what this tool is for.
    About,
}

/// Arguments for the `template` command.
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Task type (e.g. user-stories, dor).
    pub task: TaskType,

    /// Also list the placeholders the template references.
    #[arg(long)]
    pub placeholders: bool,
}

/// Where the context text comes from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Context text for input-driven task types.
    #[arg(short, long, conflicts_with = "input_file")]
    pub input: Option<String>,

    /// Read the context text from a file ("-" for stdin).
    #[arg(long, value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Send the prompt even when the context text is empty.
    #[arg(long)]
    pub allow_empty: bool,
}

/// One-off replacement of the task's template.
#[derive(Args, Debug, Default)]
pub struct TemplateOverrideArgs {
    /// Template text to use instead of the configured one.
    #[arg(long, conflicts_with = "template_file")]
    pub template: Option<String>,

    /// Read the template text from a file.
    #[arg(long, value_name = "PATH")]
    pub template_file: Option<PathBuf>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Task type (e.g. user-stories, dor).
    pub task: TaskType,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub template: TemplateOverrideArgs,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Task type (e.g. user-stories, dor).
    pub task: TaskType,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub template: TemplateOverrideArgs,

    /// Model to use instead of the configured one.
    #[arg(long)]
    pub model: Option<String>,

    /// Request timeout in seconds instead of the configured one.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

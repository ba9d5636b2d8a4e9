//! Implementation of the `scrumhelper generate` command.
//!
//! Renders the prompt, reads the credential, sends one request and prints
//! the generated text. Nothing reaches stdout unless generation succeeds.

use super::prompt::prepare_prompt;
use crate::cli::GenerateArgs;
use crate::client::{ClientSettings, Credential, GeminiClient, TextGenerator};
use crate::config::Config;
use crate::error::Result;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Execute the `scrumhelper generate` command.
pub async fn cmd_generate(config_path: Option<&Path>, args: GenerateArgs) -> Result<()> {
    let config = Config::resolve(config_path)?;
    run_generate(&config, args, &mut io::stdout()).await
}

/// Render, call the service, and write the result to `out`.
pub async fn run_generate<W: Write>(config: &Config, args: GenerateArgs, out: &mut W) -> Result<()> {
    let prompt = prepare_prompt(config, args.task, &args.input, &args.template)?;

    let settings = ClientSettings::from_config(config)
        .with_model(args.model)
        .with_timeout_secs(args.timeout_secs);
    let credential = Credential::from_env(&config.api_key_env)?;
    let client = GeminiClient::new(settings, credential)?;

    info!(task = %args.task, model = %client.settings().model, "generating");
    eprintln!("Generating...");
    let text = client.generate(&prompt).await?;

    write_generated(out, &text)
}

/// Print generated text under its heading.
pub fn write_generated<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "Generated Output:")?;
    writeln!(out, "{}", text.trim_end())?;
    out.flush()?;
    Ok(())
}

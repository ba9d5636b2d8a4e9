//! Tests for the interactive session.

use super::*;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Records prompts and answers with a fixed reply.
#[derive(Clone, Default)]
struct RecordingGenerator {
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("GENERATED TEXT".to_string())
    }
}

async fn run(script: &str, generator: &RecordingGenerator) -> String {
    let mut out = Vec::new();
    let state = SessionState::new(TemplateRegistry::default());
    run_session(script.as_bytes(), &mut out, state, || Ok(generator.clone()))
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn user_stories_flow_sends_context() {
    let generator = RecordingGenerator::default();
    let output = run(
        "use user-stories\ninput\na mobile banking app\n.\ngenerate\nquit\n",
        &generator,
    )
    .await;

    assert!(output.contains("Selected: User Stories"));
    assert!(output.contains("Generated Output:\nGENERATED TEXT\n"));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("\"a mobile banking app\""));
    assert!(prompts[0].contains("- As a [role], I want to [action], so that [benefit]."));
}

#[tokio::test]
async fn definition_of_ready_needs_no_input() {
    let generator = RecordingGenerator::default();
    run("use dor\ngenerate\n", &generator).await;

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(
        prompts.as_slice(),
        [crate::templates::default_template(TaskType::DefinitionOfReady).to_string()]
    );
}

#[tokio::test]
async fn missing_context_reports_error_and_continues() {
    let generator = RecordingGenerator::default();
    let output = run("generate\nabout\n", &generator).await;

    assert!(output.contains("Error: Product Backlog needs context text."));
    assert!(output.contains(ABOUT));
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn edits_last_for_the_session_and_reset_restores() {
    let generator = RecordingGenerator::default();
    let output = run(
        "use dod\nedit\nList five DoD items\nfor a mobile team.\n.\nshow\nrender\nreset\nrender\n",
        &generator,
    )
    .await;

    assert!(output.contains("Template for Definition of Done (DoD) (edited):"));
    assert!(output.contains("List five DoD items\nfor a mobile team.\n"));
    assert!(output.contains("Template restored to the built-in default."));
    assert!(output.contains("Provide a standard Definition of Done (DoD) for agile user stories."));
}

#[tokio::test]
async fn broken_edit_fails_at_render_time() {
    let generator = RecordingGenerator::default();
    let output = run(
        "use acceptance-criteria\ninput\nstory\n.\nedit\nCriteria for {input_text\n.\ngenerate\n",
        &generator,
    )
    .await;

    assert!(output.contains("Error: Template error: unmatched '{'"));
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn input_for_definition_type_is_rejected() {
    let generator = RecordingGenerator::default();
    let output = run("use dod\ninput\n", &generator).await;
    assert!(output.contains("Error: Definition of Done (DoD) takes no context"));
}

#[tokio::test]
async fn missing_credential_reports_authentication_error() {
    let mut out = Vec::new();
    let state = SessionState::new(TemplateRegistry::default());
    run_session(
        "use dor\ngenerate\nquit\n".as_bytes(),
        &mut out,
        state,
        || -> Result<RecordingGenerator> {
            Err(ScrumError::Authentication(
                "environment variable GEMINI_API_KEY is not set".to_string(),
            ))
        },
    )
    .await
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Error: Authentication failed:"));
    assert!(!output.contains("Generated Output:"));
}

#[tokio::test]
async fn unknown_commands_do_not_end_session() {
    let generator = RecordingGenerator::default();
    let output = run("dance\nuse nothing\ntasks\n", &generator).await;

    assert!(output.contains("Error: unknown command 'dance'"));
    assert!(output.contains("Error: unknown task type 'nothing'"));
    assert!(output.contains("Task types:"));
}

#[tokio::test]
async fn end_of_input_ends_session() {
    let generator = RecordingGenerator::default();
    let output = run("", &generator).await;
    assert!(output.ends_with("[product-backlog]> \n"));
}

#[test]
fn state_starts_on_product_backlog_with_defaults() {
    let state = SessionState::new(TemplateRegistry::default());
    assert_eq!(state.current(), TaskType::ProductBacklog);
    assert!(!state.registry().is_modified(TaskType::ProductBacklog));
}

#[test]
fn read_block_stops_at_dot() {
    let mut lines = "one\ntwo\n.\nthree\n".as_bytes().lines();
    assert_eq!(read_block(&mut lines).unwrap(), "one\ntwo");
    assert_eq!(lines.next().unwrap().unwrap(), "three");
}

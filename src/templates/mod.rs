//! Prompt templates for the agile task types.
//!
//! This module provides:
//!
//! - **Registry**: the current template for each task type
//! - **Render**: `{input_text}` substitution into a template
//!
//! # Template Syntax
//!
//! ```text
//! Based on the user story: "{input_text}",
//! generate 3-5 clear acceptance criteria using the format:
//! - [Criterion]
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod registry;
mod render;

pub use registry::{TemplateRegistry, default_template};
pub use render::{INPUT_PLACEHOLDER, TemplateError, placeholders, render, render_template};

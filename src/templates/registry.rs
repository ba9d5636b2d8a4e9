//! In-memory registry mapping each task type to its prompt template.
//!
//! The registry starts from the built-in defaults, can be overlaid with
//! templates from the config file, and can be edited for the rest of a
//! session. Nothing is ever written back to disk.

use crate::task_type::TaskType;
use std::collections::BTreeMap;

const PRODUCT_BACKLOG_TEMPLATE: &str = r#"
    Based on the product description: "{input_text}",
    generate a high-level product backlog with at least 5 backlog items.
    Format:
    - Backlog Item Title
    - Short Description
    "#;

const USER_STORIES_TEMPLATE: &str = r#"
    Based on the input "{input_text}",
    generate detailed user stories in the following format:
    - As a [role], I want to [action], so that [benefit].
    "#;

const ACCEPTANCE_CRITERIA_TEMPLATE: &str = r#"
    Based on the user story: "{input_text}",
    generate 3-5 clear acceptance criteria using the format:
    - [Criterion]
    "#;

const DEFINITION_OF_READY_TEMPLATE: &str = r#"
    Provide a standard Definition of Ready (DoR) for agile user stories.
    "#;

const DEFINITION_OF_DONE_TEMPLATE: &str = r#"
    Provide a standard Definition of Done (DoD) for agile user stories.
    "#;

/// Built-in template for a task type.
pub fn default_template(task_type: TaskType) -> &'static str {
    match task_type {
        TaskType::ProductBacklog => PRODUCT_BACKLOG_TEMPLATE,
        TaskType::UserStories => USER_STORIES_TEMPLATE,
        TaskType::AcceptanceCriteria => ACCEPTANCE_CRITERIA_TEMPLATE,
        TaskType::DefinitionOfReady => DEFINITION_OF_READY_TEMPLATE,
        TaskType::DefinitionOfDone => DEFINITION_OF_DONE_TEMPLATE,
    }
}

/// Templates keyed by task type.
///
/// Edited templates are not validated here; a broken edit surfaces as a
/// [`TemplateError`](super::TemplateError) when it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: BTreeMap<TaskType, String>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self {
            templates: TaskType::ALL
                .into_iter()
                .map(|t| (t, default_template(t).to_string()))
                .collect(),
        }
    }
}

impl TemplateRegistry {
    /// Current template for a task type.
    pub fn get_template(&self, task_type: TaskType) -> &str {
        self.templates
            .get(&task_type)
            .map(String::as_str)
            .unwrap_or_else(|| default_template(task_type))
    }

    /// Replace the template for a task type in place.
    pub fn set_template(&mut self, task_type: TaskType, new_text: impl Into<String>) {
        self.templates.insert(task_type, new_text.into());
    }

    /// Return a registry with one template replaced.
    pub fn with_template(mut self, task_type: TaskType, new_text: impl Into<String>) -> Self {
        self.set_template(task_type, new_text);
        self
    }

    /// Return a registry with every given template replaced.
    pub fn with_overrides<I, S>(self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (TaskType, S)>,
        S: Into<String>,
    {
        overrides
            .into_iter()
            .fold(self, |registry, (task_type, text)| {
                registry.with_template(task_type, text)
            })
    }

    /// Restore the built-in template for a task type.
    pub fn reset(&mut self, task_type: TaskType) {
        self.set_template(task_type, default_template(task_type));
    }

    /// Whether the template for a task type differs from the built-in one.
    pub fn is_modified(&self, task_type: TaskType) -> bool {
        self.get_template(task_type) != default_template(task_type)
    }
}

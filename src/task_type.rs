//! The closed set of agile task types a prompt can be generated for.
//!
//! Each task type selects one template. Three of them are input-driven
//! (the template embeds the user's context through `{input_text}`); the two
//! "definition" types are self-contained and take no input at all.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A task type, in the order it is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskType {
    /// High-level backlog derived from a product description.
    ProductBacklog,
    /// User stories in "As a ..., I want ..., so that ..." form.
    UserStories,
    /// Acceptance criteria for a single user story.
    AcceptanceCriteria,
    /// Standard Definition of Ready.
    DefinitionOfReady,
    /// Standard Definition of Done.
    DefinitionOfDone,
}

/// Error returned when a string names no known task type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task type '{input}' (expected one of: {expected})")]
pub struct ParseTaskTypeError {
    input: String,
    expected: String,
}

impl TaskType {
    /// All task types in display order.
    pub const ALL: [TaskType; 5] = [
        TaskType::ProductBacklog,
        TaskType::UserStories,
        TaskType::AcceptanceCriteria,
        TaskType::DefinitionOfReady,
        TaskType::DefinitionOfDone,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TaskType::ProductBacklog => "Product Backlog",
            TaskType::UserStories => "User Stories",
            TaskType::AcceptanceCriteria => "Acceptance Criteria",
            TaskType::DefinitionOfReady => "Definition of Ready (DoR)",
            TaskType::DefinitionOfDone => "Definition of Done (DoD)",
        }
    }

    /// Short identifier used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            TaskType::ProductBacklog => "product-backlog",
            TaskType::UserStories => "user-stories",
            TaskType::AcceptanceCriteria => "acceptance-criteria",
            TaskType::DefinitionOfReady => "dor",
            TaskType::DefinitionOfDone => "dod",
        }
    }

    /// Key used for this task type in the YAML config.
    pub fn config_key(self) -> &'static str {
        match self {
            TaskType::ProductBacklog => "product_backlog",
            TaskType::UserStories => "user_stories",
            TaskType::AcceptanceCriteria => "acceptance_criteria",
            TaskType::DefinitionOfReady => "definition_of_ready",
            TaskType::DefinitionOfDone => "definition_of_done",
        }
    }

    /// Whether the user must supply context text for this task type.
    pub fn requires_input(self) -> bool {
        matches!(
            self,
            TaskType::ProductBacklog | TaskType::UserStories | TaskType::AcceptanceCriteria
        )
    }

    /// Prompt shown when asking for the context text, e.g.
    /// "Provide the user stories context:".
    pub fn input_prompt(self) -> String {
        format!("Provide the {} context:", self.label().to_lowercase())
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskType {
    type Err = ParseTaskTypeError;

    /// Accepts the slug, the config key, or the label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TaskType::ALL
            .into_iter()
            .find(|t| {
                needle.eq_ignore_ascii_case(t.slug())
                    || needle.eq_ignore_ascii_case(t.config_key())
                    || needle.eq_ignore_ascii_case(t.label())
            })
            .ok_or_else(|| ParseTaskTypeError {
                input: s.to_string(),
                expected: TaskType::ALL
                    .iter()
                    .map(|t| t.slug())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_three_types_require_input() {
        let input_driven: Vec<_> = TaskType::ALL
            .into_iter()
            .filter(|t| t.requires_input())
            .collect();
        assert_eq!(
            input_driven,
            vec![
                TaskType::ProductBacklog,
                TaskType::UserStories,
                TaskType::AcceptanceCriteria
            ]
        );
    }

    #[test]
    fn parses_slug_label_and_config_key() {
        assert_eq!("user-stories".parse(), Ok(TaskType::UserStories));
        assert_eq!("User Stories".parse(), Ok(TaskType::UserStories));
        assert_eq!("user_stories".parse(), Ok(TaskType::UserStories));
        assert_eq!("DoR".parse(), Ok(TaskType::DefinitionOfReady));
        assert_eq!(
            "definition of done (dod)".parse(),
            Ok(TaskType::DefinitionOfDone)
        );
        assert_eq!(
            "  acceptance-criteria ".parse(),
            Ok(TaskType::AcceptanceCriteria)
        );
    }

    #[test]
    fn unknown_task_type_lists_choices() {
        let err = "sprint-review".parse::<TaskType>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sprint-review"));
        assert!(msg.contains("product-backlog"));
        assert!(msg.contains("dod"));
    }

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for t in TaskType::ALL {
            assert_eq!(t.slug().parse(), Ok(t));
            assert_eq!(t.config_key().parse(), Ok(t));
            assert_eq!(t.label().parse(), Ok(t));
        }
    }

    #[test]
    fn input_prompt_uses_lowercase_label() {
        assert_eq!(
            TaskType::ProductBacklog.input_prompt(),
            "Provide the product backlog context:"
        );
    }
}

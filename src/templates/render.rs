//! Template engine for placeholder substitution.
//!
//! Templates use `{name}` placeholders. Task templates only ever reference
//! `{input_text}`, but the engine is general so that user-edited templates
//! fail loudly instead of silently dropping unknown placeholders.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Undefined variables are an error rather than an empty substitution.

use std::collections::HashMap;
use std::fmt;

/// Name of the placeholder that receives the user's context text.
pub const INPUT_PLACEHOLDER: &str = "input_text";

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// The byte position in the template where the variable was found.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName {
        /// The position of the empty variable.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// A single lexical piece of a template.
enum Segment<'a> {
    Literal(char),
    Variable { name: &'a str, position: usize },
}

/// Walk the template, handing each literal character or placeholder to `visit`.
fn scan<'a, F>(template: &'a str, mut visit: F) -> Result<(), TemplateError>
where
    F: FnMut(Segment<'a>) -> Result<(), TemplateError>,
{
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    visit(Segment::Literal('{'))?;
                    continue;
                }

                let name_start = pos + 1;
                let name_end = loop {
                    match chars.next() {
                        Some((end, '}')) => break end,
                        Some(_) => {}
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                };

                let raw = &template[name_start..name_end];
                if raw.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                visit(Segment::Variable {
                    name: raw.trim(),
                    position: pos,
                })?;
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is kept as-is
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                visit(Segment::Literal('}'))?;
            }
            _ => visit(Segment::Literal(ch))?,
        }
    }

    Ok(())
}

/// Render a template string by substituting variables.
///
/// # Examples
///
/// ```ignore
/// let vars = vars([("name", "Alice")]);
/// assert_eq!(render_template("Hello {name}", &vars)?, "Hello Alice");
/// assert_eq!(render_template("Use {{var}}", &vars)?, "Use {var}");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    scan(template, |segment| {
        match segment {
            Segment::Literal(ch) => result.push(ch),
            Segment::Variable { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
        Ok(())
    })?;

    Ok(result)
}

/// Render a task template with the user's context text.
///
/// Every `{input_text}` occurrence is replaced by `input_text`. A template
/// without placeholders is returned unchanged whatever the input. When
/// `input_text` is `None`, a template that still references `{input_text}`
/// fails with [`TemplateError::UndefinedVariable`].
pub fn render(template: &str, input_text: Option<&str>) -> Result<String, TemplateError> {
    let variables = match input_text {
        Some(text) => vars([(INPUT_PLACEHOLDER, text)]),
        None => HashMap::new(),
    };
    render_template(template, &variables)
}

/// List the distinct placeholder names a template references, in order of
/// first appearance.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    let mut names: Vec<String> = Vec::new();

    scan(template, |segment| {
        if let Segment::Variable { name, .. } = segment {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Ok(())
    })?;

    Ok(names)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

//! Error types for the scrumhelper CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::templates::TemplateError;
use thiserror::Error;

/// Main error type for scrumhelper operations.
///
/// Every failure propagates to the top-level command, which prints the
/// message and exits with the code from [`ScrumError::exit_code`].
#[derive(Error, Debug)]
pub enum ScrumError {
    /// User provided invalid arguments or missing input.
    #[error("{0}")]
    UserError(String),

    /// Configuration file could not be read or failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The selected template could not be rendered.
    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),

    /// The API key is missing, blank, or was rejected by the service.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The service refused the request because of rate limiting.
    #[error("Rate limited by service: {0}")]
    RateLimited(String),

    /// Network failure, timeout, or an unexpected HTTP status.
    #[error("Service request failed: {0}")]
    Service(String),

    /// The service answered but the payload held no usable text.
    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrumError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrumError::UserError(_) => exit_codes::USER_ERROR,
            ScrumError::ConfigError(_) => exit_codes::USER_ERROR,
            ScrumError::Io(_) => exit_codes::USER_ERROR,
            ScrumError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
            ScrumError::Authentication(_) => exit_codes::AUTH_FAILURE,
            ScrumError::RateLimited(_) => exit_codes::SERVICE_FAILURE,
            ScrumError::Service(_) => exit_codes::SERVICE_FAILURE,
            ScrumError::MalformedResponse(_) => exit_codes::SERVICE_FAILURE,
        }
    }

    /// Whether the failure came from the credential rather than the request.
    #[cfg(test)]
    pub fn is_authentication(&self) -> bool {
        matches!(self, ScrumError::Authentication(_))
    }
}

/// Result type alias for scrumhelper operations.
pub type Result<T> = std::result::Result<T, ScrumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ScrumError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = ScrumError::ConfigError("timeout_seconds must be positive".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn template_error_has_correct_exit_code() {
        let err = ScrumError::from(TemplateError::UnmatchedBrace { position: 3 });
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn authentication_error_has_correct_exit_code() {
        let err = ScrumError::Authentication("GEMINI_API_KEY is not set".to_string());
        assert_eq!(err.exit_code(), exit_codes::AUTH_FAILURE);
        assert!(err.is_authentication());
    }

    #[test]
    fn service_errors_share_exit_code() {
        for err in [
            ScrumError::RateLimited("quota".to_string()),
            ScrumError::Service("connection reset".to_string()),
            ScrumError::MalformedResponse("no candidates".to_string()),
        ] {
            assert_eq!(err.exit_code(), exit_codes::SERVICE_FAILURE);
            assert!(!err.is_authentication());
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ScrumError::Authentication("GEMINI_API_KEY is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Authentication failed: GEMINI_API_KEY is not set"
        );

        let err = ScrumError::from(TemplateError::UndefinedVariable {
            name: "input_text".to_string(),
            position: 12,
        });
        assert_eq!(
            err.to_string(),
            "Template error: undefined variable 'input_text' at position 12 in template"
        );
    }
}

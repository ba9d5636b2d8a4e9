//! Static API credential read from the process environment.

use crate::error::{Result, ScrumError};
use std::env::{self, VarError};
use std::fmt;

/// API key for the generative-language service.
///
/// The key is never printed: `Debug` redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap an API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the API key from the environment variable `var`.
    ///
    /// A missing, blank, or non-UTF-8 value is an authentication failure.
    pub fn from_env(var: &str) -> Result<Self> {
        match env::var(var) {
            Ok(value) if value.trim().is_empty() => Err(ScrumError::Authentication(format!(
                "environment variable {} is empty",
                var
            ))),
            Ok(value) => Ok(Self::new(value.trim())),
            Err(VarError::NotPresent) => Err(ScrumError::Authentication(format!(
                "environment variable {} is not set (export it or add it to .env)",
                var
            ))),
            Err(VarError::NotUnicode(_)) => Err(ScrumError::Authentication(format!(
                "environment variable {} is not valid UTF-8",
                var
            ))),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VAR: &str = "SCRUMHELPER_TEST_CREDENTIAL";

    fn set(value: &str) {
        // SAFETY: tests touching the environment are serialized.
        unsafe { env::set_var(VAR, value) };
    }

    fn clear() {
        // SAFETY: tests touching the environment are serialized.
        unsafe { env::remove_var(VAR) };
    }

    #[test]
    #[serial]
    fn missing_variable_is_authentication_error() {
        clear();
        let err = Credential::from_env(VAR).unwrap_err();
        assert!(err.is_authentication());
        assert!(err.to_string().contains(VAR));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    #[serial]
    fn blank_variable_is_authentication_error() {
        set("   ");
        let err = Credential::from_env(VAR).unwrap_err();
        clear();
        assert!(err.is_authentication());
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    #[serial]
    fn present_variable_is_trimmed() {
        set(" abc123\n");
        let credential = Credential::from_env(VAR).unwrap();
        clear();
        assert_eq!(credential.expose(), "abc123");
    }

    #[test]
    fn debug_redacts_key() {
        let credential = Credential::new("super-secret");
        let shown = format!("{:?}", credential);
        assert!(!shown.contains("super-secret"));
    }
}

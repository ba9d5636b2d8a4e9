//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default hosted model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default REST endpoint for the generative-language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "scrumhelper.yaml";

/// Configuration for scrumhelper.
///
/// Every field is optional in the YAML; unknown fields are ignored for
/// forward compatibility.
///
/// ```yaml
/// model: gemini-1.5-flash
/// timeout_seconds: 30
/// api_key_env: GEMINI_API_KEY
/// temperature: 0.4
/// templates:
///   definition_of_done: |
///     Provide a short Definition of Done for a mobile team.
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Service settings
    // =========================================================================
    /// Hosted model name (default: "gemini-1.5-flash").
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the REST API, without the `/models/...` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Name of the environment variable that holds the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    // =========================================================================
    // Generation settings
    // =========================================================================
    /// Sampling temperature (service default when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Upper bound on generated tokens (service default when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    // =========================================================================
    // Templates
    // =========================================================================
    /// Template overrides keyed by task type (`product_backlog`, `dor`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub templates: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            api_key_env: default_api_key_env(),
            temperature: None,
            max_output_tokens: None,
            templates: BTreeMap::new(),
        }
    }
}

// Default value functions for serde
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}
fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

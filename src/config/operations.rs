//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Result, ScrumError};
use crate::task_type::TaskType;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ScrumError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScrumError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `scrumhelper.yaml` in `dir`
    /// is used when present, otherwise the defaults.
    pub fn resolve_in(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            Self::load(candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the effective config relative to the current directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve_in(&cwd, explicit)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are silently ignored. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                ScrumError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ScrumError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `model`, `base_url` and `api_key_env` must be non-empty
    /// - `timeout_seconds` must be positive
    /// - `temperature`, when set, must lie in `0.0..=2.0`
    /// - `max_output_tokens`, when set, must be positive
    /// - every `templates` key must name a task type
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ScrumError::ConfigError(
                "config validation failed: model must not be empty".to_string(),
            ));
        }

        if self.base_url.trim().is_empty() {
            return Err(ScrumError::ConfigError(
                "config validation failed: base_url must not be empty".to_string(),
            ));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(ScrumError::ConfigError(
                "config validation failed: api_key_env must not be empty".to_string(),
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ScrumError::ConfigError(
                "config validation failed: timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ScrumError::ConfigError(format!(
                    "config validation failed: temperature must be between 0.0 and 2.0 (found {})",
                    temperature
                )));
            }
        }

        if self.max_output_tokens == Some(0) {
            return Err(ScrumError::ConfigError(
                "config validation failed: max_output_tokens must be greater than 0".to_string(),
            ));
        }

        self.template_overrides().map(|_| ())
    }

    /// Template overrides with their keys parsed into task types.
    ///
    /// Two keys naming the same task type (for example `dod` and
    /// `definition_of_done`) are rejected.
    pub fn template_overrides(&self) -> Result<BTreeMap<TaskType, String>> {
        let mut overrides: BTreeMap<TaskType, (&str, String)> = BTreeMap::new();

        for (key, text) in &self.templates {
            let task_type = key.parse::<TaskType>().map_err(|e| {
                ScrumError::ConfigError(format!("config validation failed: templates: {}", e))
            })?;

            if let Some((previous, _)) = overrides.get(&task_type) {
                return Err(ScrumError::ConfigError(format!(
                    "config validation failed: templates: {} given more than once ({}, {})",
                    task_type.config_key(),
                    previous,
                    key
                )));
            }
            overrides.insert(task_type, (key.as_str(), text.clone()));
        }

        Ok(overrides
            .into_iter()
            .map(|(task_type, (_, text))| (task_type, text))
            .collect())
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

//! Configuration model for scrumhelper.
//!
//! This module defines the Config struct that represents `scrumhelper.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::{
    Config, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECONDS,
};

//! Response generation against the hosted generative-language service.
//!
//! This module provides:
//!
//! - **Credential**: the static API key, read from the environment
//! - **Gemini**: a `generateContent` client with an explicit timeout
//! - **Types**: request and response wire structs
//!
//! One prompt in, one text out. There is no retry, caching, or
//! conversation state; every failure is returned as a typed
//! [`ScrumError`](crate::error::ScrumError).

mod credential;
mod gemini;
mod types;

use crate::error::Result;
use async_trait::async_trait;

pub use credential::Credential;
pub use gemini::{ClientSettings, GeminiClient};

/// Anything that turns a rendered prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` and return the plain-text completion.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

//! Gemini `generateContent` client.
//!
//! Non-success statuses are classified by [`classify_failure`]; transport
//! errors and timeouts become [`ScrumError::Service`].

use super::TextGenerator;
use super::credential::Credential;
use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::config::Config;
use crate::error::{Result, ScrumError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, info, instrument, trace};

/// Connection and generation settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub generation: GenerationConfig,
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout: config.timeout(),
            generation: GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model = model;
        }
        self
    }

    pub fn with_timeout_secs(mut self, seconds: Option<u64>) -> Self {
        if let Some(seconds) = seconds {
            self.timeout = Duration::from_secs(seconds);
        }
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

// Gemini Client
pub struct GeminiClient {
    client: Client,
    credential: Credential,
    settings: ClientSettings,
}

impl GeminiClient {
    pub fn new(settings: ClientSettings, credential: Credential) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ScrumError::Service(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            credential,
            settings,
        })
    }

    /// Build a client from config, reading the credential from the environment.
    pub fn from_config(config: &Config) -> Result<Self> {
        let credential = Credential::from_env(&config.api_key_env)?;
        Self::new(ClientSettings::from_config(config), credential)
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn transport_error(&self, e: reqwest::Error) -> ScrumError {
        if e.is_timeout() {
            ScrumError::Service(format!(
                "request timed out after {}s",
                self.settings.timeout.as_secs()
            ))
        } else {
            ScrumError::Service(format!("request failed: {}", e))
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.settings.model))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.settings.endpoint();
        let request =
            GenerateContentRequest::from_prompt(prompt, self.settings.generation.clone().non_empty());

        debug!(%url, prompt_chars = prompt.chars().count(), "sending generateContent request");
        trace!(prompt = %prompt, "prompt text");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!("generateContent deserialization failed: {}", e);
            trace!(body = %body, "undecodable response body");
            ScrumError::MalformedResponse(format!("could not decode response: {}", e))
        })?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                total_tokens = ?usage.total_token_count,
                "token usage"
            );
        }

        let text = parsed
            .text()
            .ok_or_else(|| ScrumError::MalformedResponse(parsed.empty_reason()))?;

        info!(chars = text.len(), "generateContent request successful");
        trace!(text = %text, "response text");
        Ok(text)
    }
}

/// Map a non-success HTTP status and body to an error class.
pub fn classify_failure(status: StatusCode, body: &str) -> ScrumError {
    let api_error = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error);

    let detail = match &api_error {
        Some(e) => match &e.status {
            Some(s) => format!("{} ({}): {}", status, s, e.message),
            None => format!("{}: {}", status, e.message),
        },
        None if body.trim().is_empty() => status.to_string(),
        None => format!("{}: {}", status, body.trim()),
    };

    let invalid_key = api_error.as_ref().is_some_and(|e| e.is_invalid_key());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ScrumError::Authentication(detail),
        StatusCode::BAD_REQUEST if invalid_key => ScrumError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => ScrumError::RateLimited(detail),
        _ => ScrumError::Service(detail),
    }
}

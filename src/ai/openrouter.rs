//! OpenRouter HTTP client for chat completion.
//!
//! This module provides a small client for the OpenRouter chat-completions
//! API. One invocation makes exactly one request: no streaming, no retry
//! loop, and the round trip is bounded by the configured timeout.

use crate::errors::{AppError, AppResult, ModelError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// Client for the OpenRouter chat-completions API.
pub struct OpenRouterClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenRouterClient {
    /// Creates a new OpenRouter client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the provider (e.g., "https://openrouter.ai")
    /// * `api_key` - Bearer credential for the provider
    /// * `timeout` - Bound on each round trip, connect included
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Sends a chat completion request and returns the completion text.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider is unreachable or the request times out
    /// - The provider answers with a non-success status
    /// - The completion body has no usable choice
    pub async fn chat(&self, model: &str, messages: &[Message]) -> Result<String, ModelError> {
        debug!(model, "sending chat completion request");

        let url = format!("{}/api/v1/chat/completions", self.base_url);
        let request = ChatRequest { model, messages };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ModelError::Offline)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api { status, body });
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            ModelError::InvalidResponse(format!("Failed to decode completion: {e}"))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ModelError::InvalidResponse("Completion contained no choices".to_string())
            })?;

        debug!("received chat completion");
        Ok(content)
    }
}

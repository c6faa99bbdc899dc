//! Chat-completion collaborator.
//!
//! [`CompletionClient`] is the seam the disease-info service talks to;
//! [`ChatCompletionClient`] implements it against an OpenAI-style
//! `chat/completions` endpoint (DeepSeek through OpenRouter in production).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::constants::{APP_TITLE, HTTP_REFERER};

/// One prompt for the completion collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion endpoint URL is not set")]
    Unconfigured,
    #[error("completion request timed out")]
    Timeout,
    #[error("completion request failed: {0}")]
    Transport(reqwest::Error),
    #[error("completion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout
        } else {
            CompletionError::Transport(e)
        }
    }
}

/// Produces free-text completions.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for an OpenAI-compatible chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: Client,
    config: CompletionConfig,
}

impl ChatCompletionClient {
    /// Builds a client whose requests are bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Transport` if the HTTP client cannot be constructed.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CompletionError::Transport)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let url = self
            .config
            .api_url
            .as_deref()
            .ok_or(CompletionError::Unconfigured)?;

        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(self.config.api_key.as_deref().unwrap_or_default())
            .header("HTTP-Referer", HTTP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "completion response received");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".into()))
    }
}

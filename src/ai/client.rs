//! Completion clients for the upstream model.
//!
//! [`CompletionClient`] is the only seam between the designer and the network.
//! Production code uses [`HttpCompletionClient`]; [`OfflineClient`] stands in
//! when no API key is configured and makes every operation resolve to its
//! fallback.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::constants::USER_AGENT;

/// Failure talking to the upstream model.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// Connection failure.
    #[error("network error: {0}")]
    Transport(String),
    /// Request exceeded the configured timeout.
    #[error("timeout")]
    Timeout,
    /// Non-success status not covered by a dedicated variant.
    #[error("http {status}: {body}")]
    Http {
        /// Status code.
        status: u16,
        /// Response body, if readable.
        body: String,
    },
    /// 429 from the upstream.
    #[error("rate limited")]
    RateLimited,
    /// 401 or 403 from the upstream.
    #[error("invalid api key")]
    InvalidApiKey,
    /// Success status with a body that is not a chat completion.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The configured key variable is unset.
    #[error("missing api key: {0} environment variable not set")]
    MissingApiKey(String),
    /// No client is configured.
    #[error("completion service unavailable")]
    Unavailable,
}

impl CompletionError {
    /// Returns true if the error is transient and should be retried.
    #[must_use]
    pub fn should_retry(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout | Self::RateLimited => true,
            Self::Http { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions.
    System,
    /// Caller prompt.
    User,
    /// Model reply.
    Assistant,
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author.
    pub role: Role,
    /// Text.
    pub content: String,
}

impl ChatMessage {
    /// System message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// User message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    /// Conversation, system prompt first.
    pub messages: Vec<ChatMessage>,
    /// Token limit.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Anything that turns a prompt into free text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Runs one completion and returns the raw text of the first choice.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

/// Client that never reaches a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineClient;

#[async_trait]
impl CompletionClient for OfflineClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::Unavailable)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for OpenAI-compatible `chat/completions` endpoints.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_retries: usize,
}

impl HttpCompletionClient {
    /// Create a client from the `[ai]` config section.
    ///
    /// Fails with [`CompletionError::MissingApiKey`] when the configured
    /// environment variable is not set.
    pub fn from_config(config: &AiConfig) -> Result<Self, CompletionError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| CompletionError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }

    /// Create a client with an explicit API key.
    pub fn new(config: &AiConfig, api_key: String) -> Result<Self, CompletionError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
            max_retries: config.max_retries,
        })
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        match res.status() {
            s if s.is_success() => {
                let parsed = res
                    .json::<ChatCompletionResponse>()
                    .await
                    .map_err(|e| CompletionError::Malformed(e.to_string()))?;
                parsed
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message.content)
                    .ok_or_else(|| CompletionError::Malformed("no choices in response".to_string()))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CompletionError::InvalidApiKey),
            StatusCode::TOO_MANY_REQUESTS => Err(CompletionError::RateLimited),
            s => {
                let status = s.as_u16();
                let body = res.text().await.unwrap_or_default();
                Err(CompletionError::Http { status, body })
            }
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        debug!(model = %self.model, messages = request.messages.len(), "Sending completion request");

        (|| async { self.send_request(request).await })
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_secs(1))
                    .with_max_delay(Duration::from_secs(30))
                    .with_max_times(self.max_retries)
                    .with_jitter(),
            )
            .when(CompletionError::should_retry)
            .notify(|e, dur| {
                warn!(
                    "Completion request failed, retrying after {:.2}s: {}",
                    dur.as_secs_f64(),
                    e
                );
            })
            .await
    }
}

fn map_reqwest_error(e: reqwest::Error) -> CompletionError {
    if e.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::Transport(e.to_string())
    }
}

// src/services/completion.rs
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MODEL: &str = "gpt-3.5-turbo";

pub const PERSONA: &str = "You are an expert AI Leasing Assistant helping renters understand pricing, market trends, and lease terms for rental properties.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("provider returned no choices")]
    EmptyChoices,

    #[error("first choice has no message content")]
    MissingContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice.
    pub fn into_reply(self) -> Result<String, CompletionError> {
        let first = self
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyChoices)?;
        first.message.content.ok_or(CompletionError::MissingContent)
    }
}

/// The persona followed by the user's message, untouched.
pub fn conversation(message: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(PERSONA), ChatMessage::user(message)]
}

/// Client for the provider's chat completions endpoint. Built once and shared.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CompletionClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one completion request and returns the first choice's text.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest { model: MODEL, messages };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(parse_error_response(status, &bytes));
        }

        response.json::<CompletionResponse>().await?.into_reply()
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

fn parse_error_response(status: StatusCode, body: &[u8]) -> CompletionError {
    let message = match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };

    if status == StatusCode::TOO_MANY_REQUESTS {
        CompletionError::RateLimited(message)
    } else {
        CompletionError::Api { status, message }
    }
}

//! Core LLM client types and trait definitions

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Stateless LLM client - each call is independent (fresh context)
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single completion request (blocking until complete)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Model identifier used for requests
    fn model(&self) -> &str;
}

/// A completion request - everything needed for one LLM call
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt (may be empty)
    pub system_prompt: String,

    /// Conversation so far; selection uses a single user message
    pub messages: Vec<Message>,

    /// Max tokens for response
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Request with one user message and no system prompt
    pub fn user(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            system_prompt: String::new(),
            messages: vec![Message::user(prompt)],
            max_tokens,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Response from a completion request
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Text content (if any)
    pub content: Option<String>,

    /// Why the model stopped
    pub stop_reason: StopReason,

    /// Token usage for cost tracking
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// Plain text response that ended normally
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    ToolUse,
}

impl StopReason {
    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some("max_tokens") => Self::MaxTokens,
            Some("stop_sequence") => Self::StopSequence,
            Some("tool_use") => Self::ToolUse,
            _ => Self::EndTurn,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Errors that can occur during LLM operations
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing API key: environment variable {env_var} not set")]
    MissingApiKey { env_var: String },
}

/// Scripted client for tests and offline runs
///
/// Replies are returned in order; once exhausted every call fails with
/// `InvalidResponse`. Received requests are recorded.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful text reply
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queue a failing call
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    fn push(&self, reply: Result<String, String>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let next = self.replies.lock().ok().and_then(|mut r| r.pop_front());
        match next {
            Some(Ok(text)) => Ok(CompletionResponse::text(text)),
            Some(Err(message)) => Err(LlmError::ApiError { status: 500, message }),
            None => Err(LlmError::InvalidResponse("no scripted reply left".to_string())),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::RateLimited {
            retry_after: Duration::from_secs(60),
        };
        assert_eq!(err.to_string(), "Rate limited, retry after 60s");

        let err = LlmError::ApiError {
            status: 500,
            message: "Internal error".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal error");

        let err = LlmError::MissingApiKey {
            env_var: "ANTHROPIC_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_stop_reason_from_api() {
        assert_eq!(StopReason::from_api(Some("end_turn")), StopReason::EndTurn);
        assert_eq!(StopReason::from_api(Some("max_tokens")), StopReason::MaxTokens);
        assert_eq!(StopReason::from_api(None), StopReason::EndTurn);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }

    #[test]
    fn test_completion_request_user() {
        let request = CompletionRequest::user("pick a tool", 128);
        assert!(request.system_prompt.is_empty());
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
        assert_eq!(request.max_tokens, 128);
    }

    #[tokio::test]
    async fn test_mock_client_replies_in_order() {
        let mock = MockLlmClient::new().with_reply("first").with_failure("boom");

        let first = mock.complete(CompletionRequest::user("a", 10)).await.unwrap();
        assert_eq!(first.content.as_deref(), Some("first"));

        let second = mock.complete(CompletionRequest::user("b", 10)).await;
        assert!(matches!(second, Err(LlmError::ApiError { status: 500, .. })));

        let third = mock.complete(CompletionRequest::user("c", 10)).await;
        assert!(matches!(third, Err(LlmError::InvalidResponse(_))));

        assert_eq!(mock.requests().len(), 3);
        assert_eq!(mock.model(), "mock-model");
    }
}

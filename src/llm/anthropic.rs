//! Anthropic API client implementation
//!
//! This module implements the LlmClient trait for the Anthropic Messages API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::config::LlmConfig;
use crate::llm::client::{CompletionRequest, CompletionResponse, LlmClient, LlmError, Role, StopReason, TokenUsage};

/// Anthropic API version
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Seconds to wait when a 429 carries no retry-after header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Configuration for the Anthropic client
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

impl From<&LlmConfig> for AnthropicConfig {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }
}

/// Anthropic API client
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Create a client reading the API key from `api_key_env`
    pub fn from_env(api_key_env: &str, config: AnthropicConfig) -> Result<Self, LlmError> {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| LlmError::MissingApiKey {
                env_var: api_key_env.to_string(),
            })?;

        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(api_key: String, config: AnthropicConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Build the request body for the Anthropic API
    fn build_request(&self, request: &CompletionRequest) -> Value {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| {
                json!({
                    "role": match m.role {
                        Role::User => "user",
                        Role::Assistant => "assistant",
                    },
                    "content": m.content
                })
            })
            .collect();

        let mut body = json!({
            "model": self.config.model,
            "max_tokens": request.max_tokens,
            "messages": messages
        });

        if !request.system_prompt.is_empty() {
            body["system"] = json!(request.system_prompt);
        }

        body
    }

    /// Parse the API response into a CompletionResponse
    fn parse_response(body: &Value) -> Result<CompletionResponse, LlmError> {
        let blocks = body["content"]
            .as_array()
            .ok_or_else(|| LlmError::InvalidResponse("missing content array".to_string()))?;

        let text: Vec<&str> = blocks
            .iter()
            .filter(|block| block["type"].as_str() == Some("text"))
            .filter_map(|block| block["text"].as_str())
            .collect();

        let usage = TokenUsage {
            input_tokens: body["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: body["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Ok(CompletionResponse {
            content: if text.is_empty() { None } else { Some(text.join("\n")) },
            stop_reason: StopReason::from_api(body["stop_reason"].as_str()),
            usage,
        })
    }

    /// Send a request to the Anthropic API
    async fn send_request(&self, body: Value) -> Result<Value, LlmError> {
        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Handle rate limiting
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            return Err(LlmError::RateLimited {
                retry_after: Duration::from_secs(retry_after),
            });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.build_request(&request);
        let response = self.send_request(body).await?;
        let parsed = Self::parse_response(&response)?;
        log::debug!(
            "Anthropic completion: {} in / {} out tokens",
            parsed.usage.input_tokens,
            parsed.usage.output_tokens
        );
        Ok(parsed)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

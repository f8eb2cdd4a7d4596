//! LLM Client Layer - provider abstraction for the AI selection path
//!
//! This module provides:
//! - LlmClient trait for API abstraction
//! - AnthropicClient implementation
//! - MockLlmClient for tests and offline runs

pub mod anthropic;
pub mod client;

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use client::{
    CompletionRequest, CompletionResponse, LlmClient, LlmError, Message, MockLlmClient, Role, StopReason, TokenUsage,
};

//! Error types for toolsift
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in toolsift
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Invalid configuration value (weights, thresholds, env vars)
    #[error("Config error: {0}")]
    Config(String),

    /// Caller passed an argument that can never be valid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Tool catalog could not be loaded or queried
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Prompt template could not be rendered
    #[error("Template error: {0}")]
    Template(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for toolsift operations
pub type Result<T> = std::result::Result<T, SelectorError>;

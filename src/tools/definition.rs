//! Tool definitions as seen by the selector
//!
//! A tool is identified by name and carries the free text used for scoring.

use serde::{Deserialize, Serialize};

/// A callable tool exposed by a gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (e.g., "file_search", "calendar")
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Slug of the owning gateway
    #[serde(default, alias = "gateway")]
    pub gateway_slug: String,
}

impl Tool {
    /// Create a tool with no gateway
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            gateway_slug: String::new(),
        }
    }

    /// Set the owning gateway slug
    pub fn with_gateway(mut self, slug: impl Into<String>) -> Self {
        self.gateway_slug = slug.into();
        self
    }
}

/// A tool paired with the score it received in one selection call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTool {
    pub tool: Tool,
    pub score: f64,
}

impl ScoredTool {
    pub fn new(tool: Tool, score: f64) -> Self {
        Self { tool, score }
    }

    /// Name of the underlying tool
    pub fn name(&self) -> &str {
        &self.tool.name
    }
}

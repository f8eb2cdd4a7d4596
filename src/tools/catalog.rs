//! Tool catalog loading from TOML configuration
//!
//! Loads tool definitions from a TOML file and serves them to the selector
//! through the [`CatalogProvider`] trait.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SelectorError};
use crate::selection::Query;

use super::definition::Tool;

/// Source of candidate tools for a selection call
///
/// Implementations are expected to be cheap and synonymous with "already
/// filtered upstream"; the selector never paginates.
pub trait CatalogProvider: Send + Sync {
    /// Candidate tools for the given query, in catalog order
    fn tools(&self, query: &Query) -> Result<Vec<Tool>>;
}

/// TOML representation of a tool definition
#[derive(Debug, Deserialize)]
struct TomlTool {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    gateway: String,
}

/// TOML file structure
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(rename = "tool", default)]
    tools: Vec<TomlTool>,
}

/// Ordered catalog of tools
///
/// Order is preserved because it is the tie-break order of the selector.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
    filter: CatalogFilter,
}

/// Restricts what a [`ToolCatalog`] hands out as candidates
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Only tools owned by this gateway
    pub gateway: Option<String>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from an existing list
    pub fn from_tools(tools: Vec<Tool>) -> Self {
        Self {
            tools,
            filter: CatalogFilter::default(),
        }
    }

    /// Load catalog from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SelectorError::Catalog(format!("Failed to read catalog file {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Load catalog from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: TomlCatalog = toml::from_str(content)
            .map_err(|e| SelectorError::Catalog(format!("Failed to parse TOML: {}", e)))?;

        let mut tools = Vec::with_capacity(catalog.tools.len());
        for (index, toml_tool) in catalog.tools.into_iter().enumerate() {
            if toml_tool.name.trim().is_empty() {
                return Err(SelectorError::Catalog(format!(
                    "Tool #{} has an empty name",
                    index + 1
                )));
            }
            tools.push(Tool::new(toml_tool.name, toml_tool.description).with_gateway(toml_tool.gateway));
        }

        log::debug!("Loaded {} tools from catalog", tools.len());
        Ok(Self::from_tools(tools))
    }

    /// Restrict candidates with the given filter
    pub fn with_filter(mut self, filter: CatalogFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Get the first tool with the given name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// All tools, in catalog order
    pub fn all(&self) -> &[Tool] {
        &self.tools
    }

    /// Tools owned by the given gateway
    pub fn by_gateway(&self, slug: &str) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.gateway_slug == slug).collect()
    }

    /// Add a tool to the end of the catalog
    pub fn add(&mut self, tool: Tool) {
        self.tools.push(tool);
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl CatalogProvider for ToolCatalog {
    fn tools(&self, _query: &Query) -> Result<Vec<Tool>> {
        let tools = match self.filter.gateway.as_deref() {
            Some(slug) => self.by_gateway(slug).into_iter().cloned().collect(),
            None => self.tools.clone(),
        };
        Ok(tools)
    }
}

//! Tool System - tool definitions and catalog loading

mod catalog;
mod definition;

pub use catalog::{CatalogFilter, CatalogProvider, ToolCatalog};
pub use definition::{ScoredTool, Tool};

//! Tool selection: ranking a catalog for one query.
//!
//! [`SelectionEngine`] is pure and `Copy`; build it once from a
//! [`HybridConfig`](crate::config::HybridConfig) and call it from any thread.
//!
//! # Example
//!
//! ```
//! use toolsift::config::HybridConfig;
//! use toolsift::selection::{Query, SelectionEngine};
//! use toolsift::tools::Tool;
//!
//! let tools = vec![
//!     Tool::new("file_search", "Search files by name"),
//!     Tool::new("calendar", "Manage calendar events"),
//! ];
//! let engine = SelectionEngine::new(HybridConfig::default());
//! let ranked = engine.select(&tools, &Query::new("find a file"), 1, None);
//! assert_eq!(ranked[0].tool.name, "file_search");
//! ```

mod engine;
mod query;

pub use engine::{SelectionEngine, select_tools};
pub use query::{Query, SelectionMode};

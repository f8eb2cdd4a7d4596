//! Toolsift - hybrid tool selection for LLM agents
//!
//! Given a free-text task and a catalog of tools, toolsift ranks the tools
//! by lexical relevance and, when an AI selector answers with enough
//! confidence, blends that answer into the ranking.

pub mod ai;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod router;
pub mod scoring;
pub mod selection;
pub mod tools;

pub use error::{Result, SelectorError};

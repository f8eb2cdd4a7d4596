//! Prompt System - template rendering and the AI selection prompt
//!
//! This module provides a brace-placeholder template renderer and the
//! builder for the prompt sent to the AI selection provider.

mod render;
mod selection;

pub use render::PromptTemplate;
pub use selection::{
    FORMAT_INSTRUCTIONS, MAX_DESCRIPTION_CHARS, SELECTION_TEMPLATE, TRUNCATED_DESCRIPTION_CHARS,
    build_selection_prompt, escape_braces, format_tool_list, stage_selection_template, truncate_description,
};

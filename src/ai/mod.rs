//! AI selection path - providers and response parsing

mod response;
mod selector;

pub use response::{AiSelection, parse_selection_response};
pub use selector::{AiSelector, DEFAULT_SELECTION_MAX_TOKENS, LlmToolSelector, StaticSelector};

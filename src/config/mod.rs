//! Configuration system for toolsift.
//!
//! Two layers:
//! 1. [`HybridConfig`], the per-call scoring snapshot the selection engine reads
//! 2. [`SelectorConfig`], the application config file with env overrides

mod hybrid;
mod selector;

pub use self::hybrid::{
    DEFAULT_AI_WEIGHT, DEFAULT_MIN_CONFIDENCE, ENV_AI_ENABLED, ENV_AI_WEIGHT, ENV_MIN_CONFIDENCE, HybridConfig,
};
pub use self::selector::{CatalogConfig, DEFAULT_MODEL, LlmConfig, PROJECT_CONFIG_FILE, SelectorConfig};

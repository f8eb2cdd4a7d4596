//! Application configuration.
//!
//! Loaded from an explicit path, `.toolsift.yml`, or
//! `~/.config/toolsift/toolsift.yml`, then overridden from the environment.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::hybrid::HybridConfig;

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = ".toolsift.yml";

/// Default LLM model used for AI selection.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Top-level configuration for toolsift.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Log level used when RUST_LOG is not set.
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Hybrid scoring settings.
    pub hybrid: HybridConfig,

    /// LLM provider settings for the AI selection path.
    pub llm: LlmConfig,

    /// Catalog settings.
    pub catalog: CatalogConfig,
}

impl SelectorConfig {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .toolsift.yml in current directory
    /// 3. ~/.config/toolsift/toolsift.yml
    /// 4. Defaults
    ///
    /// Environment overrides are applied on top and the result is validated.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::load_file_chain(config_path)?;
        config
            .hybrid
            .apply_env(|key| std::env::var(key).ok())
            .context("Invalid environment override")?;
        config.validate()?;
        Ok(config)
    }

    fn load_file_chain(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        Self::load_first_existing(&Self::search_paths())
    }

    /// Discovered config locations, most specific first.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("toolsift").join("toolsift.yml"));
        }
        paths
    }

    /// Load the first of `paths` that exists, or defaults if none do.
    ///
    /// A file that exists but does not parse is an error; later paths are
    /// not tried.
    fn load_first_existing(paths: &[PathBuf]) -> Result<Self> {
        for path in paths {
            if path.exists() {
                let config = Self::load_from_file(path).context(format!("Failed to load {}", path.display()))?;
                log::info!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a config file without env overrides or validation.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.hybrid.validate()?;
        if self.llm.timeout_ms == 0 {
            eyre::bail!("llm.timeout-ms must be > 0");
        }
        if self.llm.max_tokens == 0 {
            eyre::bail!("llm.max-tokens must be > 0");
        }
        Ok(())
    }
}

/// LLM provider settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model used for selection prompts.
    pub model: String,

    /// Max tokens for the selection response.
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Budget for one AI selection call in milliseconds.
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Environment variable holding the API key.
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// Base URL for the API.
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 256,
            timeout_ms: 10_000,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file used when `--catalog` is not given.
    pub path: Option<PathBuf>,

    /// Only offer tools from this gateway.
    pub gateway: Option<String>,
}

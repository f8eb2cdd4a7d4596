//! Hybrid selection settings.
//!
//! Built once by the caller and passed into every selection call. Values
//! may come from a config file or the environment; both paths end in
//! [`HybridConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectorError};
use crate::scoring::clamp_unit;

/// Env var toggling the AI path.
pub const ENV_AI_ENABLED: &str = "TOOLSIFT_AI_ENABLED";

/// Env var for the AI weight in `[0, 1]`.
pub const ENV_AI_WEIGHT: &str = "TOOLSIFT_AI_WEIGHT";

/// Env var for the minimum AI confidence in `[0, 1]`.
pub const ENV_MIN_CONFIDENCE: &str = "TOOLSIFT_MIN_CONFIDENCE";

/// Default share of the final score given to AI confidence.
pub const DEFAULT_AI_WEIGHT: f64 = 0.7;

/// Default confidence gate.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.3;

/// Settings for blending AI selection with lexical ranking.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HybridConfig {
    /// Whether an AI selection is considered at all.
    #[serde(rename = "ai-enabled")]
    pub ai_enabled: bool,

    /// Share of the final score given to AI confidence.
    #[serde(rename = "ai-weight")]
    pub ai_weight: f64,

    /// AI results below this confidence are ignored.
    #[serde(rename = "min-confidence")]
    pub min_confidence: f64,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            ai_enabled: true,
            ai_weight: DEFAULT_AI_WEIGHT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl HybridConfig {
    pub fn new(ai_enabled: bool, ai_weight: f64, min_confidence: f64) -> Self {
        Self {
            ai_enabled,
            ai_weight,
            min_confidence,
        }
    }

    /// Lexical-only configuration.
    pub fn lexical_only() -> Self {
        Self {
            ai_enabled: false,
            ..Self::default()
        }
    }

    /// AI weight clamped to `[0, 1]`.
    pub fn effective_ai_weight(&self) -> f64 {
        clamp_unit(self.ai_weight)
    }

    /// Confidence gate clamped to `[0, 1]`.
    pub fn effective_min_confidence(&self) -> f64 {
        clamp_unit(self.min_confidence)
    }

    /// Reject out-of-range or non-finite values.
    pub fn validate(&self) -> Result<()> {
        check_unit("ai-weight", self.ai_weight)?;
        check_unit("min-confidence", self.min_confidence)?;
        Ok(())
    }

    /// Defaults overridden from the process environment, then validated.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Unset variables leave the current value alone; unparsable ones are an
    /// error rather than being ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_AI_ENABLED) {
            self.ai_enabled = parse_bool(ENV_AI_ENABLED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_AI_WEIGHT) {
            self.ai_weight = parse_f64(ENV_AI_WEIGHT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MIN_CONFIDENCE) {
            self.min_confidence = parse_f64(ENV_MIN_CONFIDENCE, &raw)?;
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(SelectorError::Config(format!(
            "{} must be within [0.0, 1.0], got {}",
            field, value
        )));
    }
    Ok(())
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SelectorError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

fn parse_f64(key: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| SelectorError::Config(format!("{} must be a number, got '{}'", key, raw.trim())))
}

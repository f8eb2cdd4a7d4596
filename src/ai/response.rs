//! Parsing the AI selection response.
//!
//! The model is asked for a bare JSON object. Anything that does not parse
//! into a usable [`AiSelection`] means "no AI result", never an error.

use serde::{Deserialize, Serialize};

/// One tool picked by the AI provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSelection {
    /// Must equal a candidate tool name exactly to be used.
    pub tool_name: String,
    /// Self-reported confidence, nominally in `[0, 1]`.
    pub confidence: f64,
    /// Short justification, kept for diagnostics only.
    pub reasoning: String,
}

impl AiSelection {
    pub fn new(tool_name: impl Into<String>, confidence: f64) -> Self {
        Self {
            tool_name: tool_name.into(),
            confidence,
            reasoning: String::new(),
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }
}

/// Parse model output into a selection.
///
/// Tolerates markdown fences and prose around the object by taking the
/// outermost `{...}` span. Returns `None` for anything malformed, for an
/// empty tool name, or for a non-finite confidence.
pub fn parse_selection_response(text: &str) -> Option<AiSelection> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        log::debug!("AI response has no JSON object");
        return None;
    }

    let selection: AiSelection = match serde_json::from_str(&text[start..=end]) {
        Ok(selection) => selection,
        Err(e) => {
            log::debug!("Failed to parse AI response: {}", e);
            return None;
        }
    };

    if selection.tool_name.trim().is_empty() || !selection.confidence.is_finite() {
        log::debug!("AI response rejected: {:?}", selection);
        return None;
    }

    Some(selection)
}

//! Selection engine: ranks a tool list for one query.
//!
//! The engine decides per call whether the AI result is usable:
//! - AI disabled, no result, confidence below the gate, or a tool name that
//!   matches nothing in the list -> **lexical** mode, raw lexical scores
//! - otherwise -> **hybrid** mode, the AI-named tool gets the blended score
//!   and every other tool keeps `normalized_lexical * (1 - weight)`
//!
//! Results are sorted by score descending with a stable sort, so equal
//! scores keep input order. Non-positive scores are dropped.

use crate::ai::AiSelection;
use crate::config::HybridConfig;
use crate::error::{Result, SelectorError};
use crate::scoring::{clamp_unit, hybrid_score, lexical_score, normalized_lexical_score};
use crate::tools::{ScoredTool, Tool};

use super::query::{Query, SelectionMode};

/// Stateless ranking over a tool list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionEngine {
    config: HybridConfig,
}

impl SelectionEngine {
    pub fn new(config: HybridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    /// Which path [`select`](Self::select) takes for these inputs.
    pub fn mode_for(&self, tools: &[Tool], ai: Option<&AiSelection>) -> SelectionMode {
        match self.trusted_ai(tools, ai) {
            Ok(_) => SelectionMode::Hybrid,
            Err(_) => SelectionMode::Lexical,
        }
    }

    /// Rank `tools` for `query` and return at most `top_n` with positive scores.
    pub fn select(&self, tools: &[Tool], query: &Query, top_n: usize, ai: Option<&AiSelection>) -> Vec<ScoredTool> {
        if tools.is_empty() || top_n == 0 {
            return Vec::new();
        }

        let mut scored: Vec<ScoredTool> = match self.trusted_ai(tools, ai) {
            Ok(selection) => {
                let weight = self.config.effective_ai_weight();
                tools
                    .iter()
                    .map(|tool| {
                        let score = if tool.name == selection.tool_name {
                            hybrid_score(tool, &query.task, &query.context, selection.confidence, weight)
                        } else {
                            normalized_lexical_score(&query.task, &query.context, tool) * (1.0 - weight)
                        };
                        ScoredTool::new(tool.clone(), score)
                    })
                    .collect()
            }
            Err(reason) => {
                tracing::debug!(reason, "Using lexical ranking");
                tools
                    .iter()
                    .map(|tool| ScoredTool::new(tool.clone(), lexical_score(&query.task, &query.context, tool)))
                    .collect()
            }
        };

        scored.retain(|s| s.score > 0.0);
        // Vec::sort_by is stable: ties keep input order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_n);

        tracing::debug!(
            candidates = tools.len(),
            returned = scored.len(),
            top = scored.first().map(|s| s.tool.name.as_str()),
            "Tool selection complete"
        );

        scored
    }

    /// The AI selection if it passes every gate, else why not.
    fn trusted_ai<'a>(
        &self,
        tools: &[Tool],
        ai: Option<&'a AiSelection>,
    ) -> std::result::Result<&'a AiSelection, &'static str> {
        if !self.config.ai_enabled {
            return Err("ai disabled");
        }
        let selection = ai.ok_or("no ai result")?;
        if clamp_unit(selection.confidence) < self.config.effective_min_confidence() {
            return Err("ai confidence below threshold");
        }
        if !tools.iter().any(|t| t.name == selection.tool_name) {
            return Err("ai tool not in catalog");
        }
        Ok(selection)
    }
}

/// Rank tools with optional AI input, returning the tools only.
///
/// The AI path is taken when both `ai_selected_tool` and `ai_confidence` are
/// given; no confidence gate is applied here. A NaN `ai_weight` or
/// `ai_confidence` is a caller bug and is rejected.
pub fn select_tools(
    tools: &[Tool],
    task: &str,
    context: &str,
    top_n: usize,
    ai_selected_tool: Option<&str>,
    ai_confidence: Option<f64>,
    ai_weight: f64,
) -> Result<Vec<Tool>> {
    if ai_weight.is_nan() {
        return Err(SelectorError::InvalidArgument("ai_weight is NaN".to_string()));
    }
    if ai_confidence.is_some_and(f64::is_nan) {
        return Err(SelectorError::InvalidArgument("ai_confidence is NaN".to_string()));
    }

    let ai = match (ai_selected_tool, ai_confidence) {
        (Some(name), Some(confidence)) => Some(AiSelection::new(name, confidence)),
        _ => None,
    };

    let engine = SelectionEngine::new(HybridConfig::new(true, ai_weight, 0.0));
    let query = Query::new(task).with_context(context);

    Ok(engine
        .select(tools, &query, top_n, ai.as_ref())
        .into_iter()
        .map(|scored| scored.tool)
        .collect())
}

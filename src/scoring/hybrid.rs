//! Blending AI confidence with lexical relevance.

use crate::tools::Tool;

use super::lexical::lexical_score;

/// Lexical score at which the normalized value saturates at 1.0.
///
/// Roughly the score of a well-matched tool (a few weighted name and
/// description hits). Tunable; not derived from the catalog.
pub const LEXICAL_SCORE_CEILING: f64 = 50.0;

/// Clamp into `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Map a raw lexical score into `[0, 1]`.
pub fn normalize_lexical(raw: f64) -> f64 {
    clamp_unit(raw / LEXICAL_SCORE_CEILING)
}

/// Normalized lexical score of `tool` for the task/context pair.
pub fn normalized_lexical_score(task: &str, context: &str, tool: &Tool) -> f64 {
    normalize_lexical(lexical_score(task, context, tool))
}

/// Convex blend of AI confidence and normalized lexical relevance.
///
/// Both `ai_confidence` and `ai_weight` are clamped to `[0, 1]` first, so the
/// result is always within `[0, 1]`.
pub fn hybrid_score(tool: &Tool, task: &str, context: &str, ai_confidence: f64, ai_weight: f64) -> f64 {
    let confidence = clamp_unit(ai_confidence);
    let weight = clamp_unit(ai_weight);
    let lexical = normalized_lexical_score(task, context, tool);
    confidence * weight + lexical * (1.0 - weight)
}

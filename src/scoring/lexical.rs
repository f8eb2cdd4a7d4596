//! Lexical relevance scoring.
//!
//! Scores a tool against a query by weighted token overlap across the tool
//! name, description and gateway slug, plus a substring bonus for query
//! tokens embedded in longer words ("file" inside "filesystem").
//!
//! The weights are empirical. What matters is their ordering: name beats
//! description beats gateway slug, and an exact name hit beats a partial one.

use std::collections::BTreeSet;

use crate::tools::Tool;

use super::tokenize::{expand_with_synonyms, normalize};

/// Weight of one exact token overlap with the tool name.
pub const NAME_WEIGHT: f64 = 10.0;

/// Weight of one exact token overlap with the tool description.
pub const DESCRIPTION_WEIGHT: f64 = 3.0;

/// Weight of one exact token overlap with the gateway slug.
pub const GATEWAY_WEIGHT: f64 = 2.0;

/// Base bonus for a query token found as a substring.
pub const PARTIAL_MATCH_BONUS: f64 = 2.0;

/// Multiplier applied to [`PARTIAL_MATCH_BONUS`] for name substring hits.
pub const NAME_PARTIAL_MULTIPLIER: f64 = 5.0;

/// Multiplier applied to [`PARTIAL_MATCH_BONUS`] for description substring hits.
pub const DESCRIPTION_PARTIAL_MULTIPLIER: f64 = 1.0;

/// Shortest query token eligible for substring matching.
pub const MIN_PARTIAL_TOKEN_LEN: usize = 3;

/// Per-component view of a lexical score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LexicalBreakdown {
    pub name_exact: f64,
    pub description_exact: f64,
    pub gateway_exact: f64,
    pub name_partial: f64,
    pub description_partial: f64,
}

impl LexicalBreakdown {
    /// Sum of all components.
    pub fn total(&self) -> f64 {
        self.name_exact + self.description_exact + self.gateway_exact + self.name_partial + self.description_partial
    }
}

/// Lexical relevance of `tool` for the task/context pair. Never negative.
pub fn lexical_score(task: &str, context: &str, tool: &Tool) -> f64 {
    lexical_breakdown(task, context, tool).total()
}

/// Same as [`lexical_score`], keeping the individual components.
pub fn lexical_breakdown(task: &str, context: &str, tool: &Tool) -> LexicalBreakdown {
    let mut combined = normalize(task);
    combined.extend(normalize(context));
    if combined.is_empty() {
        return LexicalBreakdown::default();
    }

    let enriched = expand_with_synonyms(&combined);

    let name_tokens = normalize(&tool.name);
    let description_tokens = normalize(&tool.description);
    let gateway_tokens = normalize(&tool.gateway_slug);

    let name_lower = tool.name.to_lowercase();
    let description_lower = tool.description.to_lowercase();

    let mut breakdown = LexicalBreakdown {
        name_exact: overlap(&enriched, &name_tokens) as f64 * NAME_WEIGHT,
        description_exact: overlap(&enriched, &description_tokens) as f64 * DESCRIPTION_WEIGHT,
        gateway_exact: overlap(&enriched, &gateway_tokens) as f64 * GATEWAY_WEIGHT,
        ..Default::default()
    };

    // Synonyms are only matched exactly.
    for token in combined.iter().filter(|t| t.len() >= MIN_PARTIAL_TOKEN_LEN) {
        if name_lower.contains(token.as_str()) {
            breakdown.name_partial += PARTIAL_MATCH_BONUS * NAME_PARTIAL_MULTIPLIER;
        }
        if description_lower.contains(token.as_str()) {
            breakdown.description_partial += PARTIAL_MATCH_BONUS * DESCRIPTION_PARTIAL_MULTIPLIER;
        }
    }

    breakdown
}

fn overlap(query: &BTreeSet<String>, field: &BTreeSet<String>) -> usize {
    query.intersection(field).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_search() -> Tool {
        Tool::new("file_search", "Search files by name")
    }

    fn calendar() -> Tool {
        Tool::new("calendar", "Manage calendar events")
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(lexical_score("", "", &file_search()), 0.0);
        assert_eq!(lexical_score("  ?!  ", "", &file_search()), 0.0);
    }

    #[test]
    fn test_find_a_file_breakdown() {
        let breakdown = lexical_breakdown("find a file", "", &file_search());
        // "file" and "search" (via find) hit the name
        assert_eq!(breakdown.name_exact, 20.0);
        // "search" (via find) and "files" (via file) hit the description
        assert_eq!(breakdown.description_exact, 6.0);
        assert_eq!(breakdown.gateway_exact, 0.0);
        // "file" is a substring of both raw texts; "find" of neither
        assert_eq!(breakdown.name_partial, 10.0);
        assert_eq!(breakdown.description_partial, 2.0);
        assert_eq!(breakdown.total(), 38.0);
    }

    #[test]
    fn test_unrelated_tool_scores_zero() {
        assert_eq!(lexical_score("find a file", "", &calendar()), 0.0);
    }

    #[test]
    fn test_context_contributes_tokens() {
        let without = lexical_score("help me", "", &calendar());
        let with = lexical_score("help me", "calendar", &calendar());
        assert_eq!(without, 0.0);
        assert!(with > 0.0);
    }

    #[test]
    fn test_gateway_slug_match() {
        let tool = Tool::new("create_issue", "Open a ticket").with_gateway("github");
        let breakdown = lexical_breakdown("github", "", &tool);
        assert_eq!(breakdown.gateway_exact, GATEWAY_WEIGHT);
        assert_eq!(breakdown.name_exact, 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        let lower = lexical_score("calendar", "", &calendar());
        let upper = lexical_score("CALENDAR", "", &Tool::new("CALENDAR", "MANAGE CALENDAR EVENTS"));
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_short_tokens_skip_partial_bonus() {
        // "fi" is a substring of the name but shorter than the minimum
        let breakdown = lexical_breakdown("fi", "", &file_search());
        assert_eq!(breakdown.name_partial, 0.0);
        assert_eq!(breakdown.description_partial, 0.0);
    }

    #[test]
    fn test_synonyms_are_not_substring_matched() {
        // "lookup" expands to "search", which is inside "searcher"
        let tool = Tool::new("searcher", "");
        let breakdown = lexical_breakdown("lookup", "", &tool);
        assert_eq!(breakdown.name_exact, 0.0);
        assert_eq!(breakdown.name_partial, 0.0);
    }

    #[test]
    fn test_partial_match_inside_longer_word() {
        let tool = Tool::new("filesystem", "Browse the filesystem");
        let breakdown = lexical_breakdown("file", "", &tool);
        assert_eq!(breakdown.name_exact, 0.0);
        assert_eq!(breakdown.name_partial, PARTIAL_MATCH_BONUS * NAME_PARTIAL_MULTIPLIER);
        assert_eq!(breakdown.description_partial, PARTIAL_MATCH_BONUS * DESCRIPTION_PARTIAL_MULTIPLIER);
    }

    #[test]
    fn test_duplicate_query_tokens_do_not_inflate() {
        let once = lexical_score("calendar", "", &calendar());
        let thrice = lexical_score("calendar calendar", "calendar", &calendar());
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_token_order_irrelevant() {
        let a = lexical_score("find a file", "", &file_search());
        let b = lexical_score("file a find", "", &file_search());
        assert_eq!(a, b);
    }

    #[test]
    fn test_weight_ordering() {
        assert!(NAME_WEIGHT > DESCRIPTION_WEIGHT);
        assert!(DESCRIPTION_WEIGHT > GATEWAY_WEIGHT);
        assert!(NAME_WEIGHT > PARTIAL_MATCH_BONUS * DESCRIPTION_PARTIAL_MULTIPLIER);
        assert!(NAME_PARTIAL_MULTIPLIER > DESCRIPTION_PARTIAL_MULTIPLIER);
    }
}

//! End-to-end selection scenarios
//!
//! Runs the public selection API against a small catalog, then checks the
//! ranking laws over generated catalogs and queries.

use proptest::prelude::*;
use toolsift::ai::AiSelection;
use toolsift::config::HybridConfig;
use toolsift::scoring::{hybrid_score, lexical_score, normalize_lexical};
use toolsift::selection::{Query, SelectionEngine, SelectionMode, select_tools};
use toolsift::tools::{Tool, ToolCatalog};

const CATALOG: &str = r#"
[[tool]]
name = "file_search"
description = "Search files by name"

[[tool]]
name = "calendar"
description = "Manage calendar events"
"#;

fn catalog_tools() -> Vec<Tool> {
    ToolCatalog::from_toml(CATALOG).unwrap().all().to_vec()
}

#[test]
fn test_lexical_pick_for_file_task() {
    let result = select_tools(&catalog_tools(), "find a file", "", 1, None, None, 0.7).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "file_search");
}

#[test]
fn test_hybrid_pick_for_schedule_task() {
    let tools = catalog_tools();
    let task = "what's on my schedule today";
    let ai = AiSelection::new("calendar", 0.9);
    let engine = SelectionEngine::new(HybridConfig::new(true, 0.7, 0.3));

    let result = engine.select(&tools, &Query::new(task), 1, Some(&ai));
    assert_eq!(result[0].name(), "calendar");

    let expected = 0.9 * 0.7 + normalize_lexical(lexical_score(task, "", &tools[1])) * 0.3;
    assert!((result[0].score - expected).abs() < 1e-9);
}

#[test]
fn test_unknown_ai_tool_is_lexical_ranking() {
    let tools = catalog_tools();
    let engine = SelectionEngine::default();
    let query = Query::new("find a file");
    let ai = AiSelection::new("nonexistent_tool", 0.95);

    assert_eq!(engine.mode_for(&tools, Some(&ai)), SelectionMode::Lexical);
    assert_eq!(engine.select(&tools, &query, 5, Some(&ai)), engine.select(&tools, &query, 5, None));

    let via_function = select_tools(&tools, "find a file", "", 5, Some("nonexistent_tool"), Some(0.95), 0.7).unwrap();
    let lexical = select_tools(&tools, "find a file", "", 5, None, None, 0.7).unwrap();
    assert_eq!(via_function, lexical);
}

#[test]
fn test_empty_task_and_context_selects_nothing() {
    let tools = catalog_tools();
    for tool in &tools {
        assert_eq!(lexical_score("", "", tool), 0.0);
    }
    assert!(select_tools(&tools, "", "", 5, None, None, 0.7).unwrap().is_empty());
}

#[test]
fn test_context_contributes_to_score() {
    let tools = catalog_tools();
    let result = select_tools(&tools, "help me", "calendar events", 1, None, None, 0.7).unwrap();
    assert_eq!(result[0].name, "calendar");
}

fn tool_strategy() -> impl Strategy<Value = Tool> {
    ("[a-z_]{1,12}", "[a-z ]{0,40}", "[a-z-]{0,10}")
        .prop_map(|(name, description, gateway)| Tool::new(name, description).with_gateway(gateway))
}

fn tools_strategy() -> impl Strategy<Value = Vec<Tool>> {
    prop::collection::vec(tool_strategy(), 0..8)
}

proptest! {
    #[test]
    fn test_selection_is_deterministic(
        tools in tools_strategy(),
        task in "[a-z ]{0,30}",
        top_n in 0usize..10,
    ) {
        let engine = SelectionEngine::default();
        let query = Query::new(task);
        prop_assert_eq!(engine.select(&tools, &query, top_n, None), engine.select(&tools, &query, top_n, None));
    }

    #[test]
    fn test_results_bounded_positive_and_sorted(
        tools in tools_strategy(),
        task in "[a-z ]{0,30}",
        top_n in 0usize..10,
    ) {
        let result = SelectionEngine::default().select(&tools, &Query::new(task), top_n, None);
        prop_assert!(result.len() <= top_n);
        prop_assert!(result.len() <= tools.len());
        prop_assert!(result.iter().all(|s| s.score > 0.0));
        prop_assert!(result.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_unknown_ai_tool_matches_lexical(
        tools in tools_strategy(),
        task in "[a-z ]{0,30}",
        confidence in 0.0f64..=1.0,
    ) {
        // Uppercase never appears in generated names
        let ai = AiSelection::new("NOT_A_TOOL", confidence);
        let engine = SelectionEngine::default();
        let query = Query::new(task);
        prop_assert_eq!(engine.select(&tools, &query, 10, Some(&ai)), engine.select(&tools, &query, 10, None));
    }

    #[test]
    fn test_hybrid_scores_within_unit_interval(
        tool in tool_strategy(),
        task in "[a-z ]{0,30}",
        confidence in -2.0f64..3.0,
        weight in -2.0f64..3.0,
    ) {
        let score = hybrid_score(&tool, &task, "", confidence, weight);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_empty_catalog_always_empty(task in "[a-z ]{0,30}", top_n in 0usize..10) {
        let ai = AiSelection::new("calendar", 1.0);
        prop_assert!(SelectionEngine::default().select(&[], &Query::new(task), top_n, Some(&ai)).is_empty());
    }
}

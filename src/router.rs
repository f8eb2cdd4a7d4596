//! Hybrid tool routing
//!
//! Fetches candidates from a catalog, asks an optional AI selector under a
//! timeout, then ranks with the selection engine. Any AI failure degrades to
//! lexical ranking; only catalog errors reach the caller.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::ai::{AiSelection, AiSelector};
use crate::config::HybridConfig;
use crate::error::Result;
use crate::selection::{Query, SelectionEngine, SelectionMode};
use crate::tools::{CatalogProvider, ScoredTool, Tool};

/// Default time allowed for the AI selector
pub const DEFAULT_AI_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of one routing call
#[derive(Debug, Clone, Serialize)]
pub struct RoutingDecision {
    /// Ranked tools, best first
    pub tools: Vec<ScoredTool>,

    /// What the AI selector answered, trusted or not
    pub ai: Option<AiSelection>,

    /// Whether the AI answer was blended in
    pub mode: SelectionMode,
}

impl RoutingDecision {
    /// Best tool, if any scored
    pub fn best(&self) -> Option<&ScoredTool> {
        self.tools.first()
    }
}

/// Routes a query to the most relevant tools
pub struct HybridToolRouter {
    catalog: Arc<dyn CatalogProvider>,
    selector: Option<Arc<dyn AiSelector>>,
    engine: SelectionEngine,
    ai_timeout: Duration,
}

impl HybridToolRouter {
    /// Lexical-capable router over `catalog`; add a selector for hybrid ranking
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: HybridConfig) -> Self {
        Self {
            catalog,
            selector: None,
            engine: SelectionEngine::new(config),
            ai_timeout: DEFAULT_AI_TIMEOUT,
        }
    }

    pub fn with_selector(mut self, selector: Arc<dyn AiSelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn with_ai_timeout(mut self, timeout: Duration) -> Self {
        self.ai_timeout = timeout;
        self
    }

    pub fn config(&self) -> &HybridConfig {
        self.engine.config()
    }

    /// Rank catalog tools for `query`, returning at most `top_n`
    pub async fn route(&self, query: &Query, top_n: usize) -> Result<RoutingDecision> {
        let tools = self.catalog.tools(query)?;
        log::debug!("Routing '{}' over {} candidate tools", query.task, tools.len());

        let ai = self.ask_selector(query, &tools).await;
        let mode = self.engine.mode_for(&tools, ai.as_ref());
        if let Some(selection) = &ai
            && mode == SelectionMode::Lexical
        {
            log::debug!(
                "Ignoring AI selection '{}' ({:.2})",
                selection.tool_name,
                selection.confidence
            );
        }

        let ranked = self.engine.select(&tools, query, top_n, ai.as_ref());
        Ok(RoutingDecision {
            tools: ranked,
            ai,
            mode,
        })
    }

    async fn ask_selector(&self, query: &Query, tools: &[Tool]) -> Option<AiSelection> {
        if !self.engine.config().ai_enabled || tools.is_empty() {
            return None;
        }
        let selector = self.selector.as_ref()?;

        match tokio::time::timeout(self.ai_timeout, selector.select(&query.task, tools)).await {
            Ok(Ok(selection)) => {
                if selection.is_none() {
                    log::debug!("AI selector gave no usable answer");
                }
                selection
            }
            Ok(Err(e)) => {
                log::warn!("AI selection failed, using lexical ranking: {}", e);
                None
            }
            Err(_) => {
                log::warn!(
                    "AI selection timed out after {}ms, using lexical ranking",
                    self.ai_timeout.as_millis()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{LlmToolSelector, StaticSelector};
    use crate::error::SelectorError;
    use crate::llm::MockLlmClient;
    use crate::tools::{CatalogFilter, ToolCatalog};
    use async_trait::async_trait;

    fn catalog() -> Arc<ToolCatalog> {
        Arc::new(ToolCatalog::from_tools(vec![
            Tool::new("file_search", "Search files by name").with_gateway("filesystem"),
            Tool::new("calendar", "Manage calendar events").with_gateway("google-workspace"),
        ]))
    }

    struct SlowSelector;

    #[async_trait]
    impl AiSelector for SlowSelector {
        async fn select(&self, _task: &str, _tools: &[Tool]) -> Result<Option<AiSelection>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Some(AiSelection::new("calendar", 1.0)))
        }
    }

    struct BrokenCatalog;

    impl CatalogProvider for BrokenCatalog {
        fn tools(&self, _query: &Query) -> Result<Vec<Tool>> {
            Err(SelectorError::Catalog("backend unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_route_lexical_without_selector() {
        let router = HybridToolRouter::new(catalog(), HybridConfig::default());
        let decision = router.route(&Query::new("find a file"), 3).await.unwrap();

        assert_eq!(decision.mode, SelectionMode::Lexical);
        assert!(decision.ai.is_none());
        assert_eq!(decision.best().unwrap().name(), "file_search");
        assert_eq!(decision.tools.len(), 1);
    }

    #[tokio::test]
    async fn test_route_hybrid_with_trusted_selection() {
        let router = HybridToolRouter::new(catalog(), HybridConfig::default())
            .with_selector(Arc::new(StaticSelector::new(Some(AiSelection::new("calendar", 0.9)))));
        let decision = router.route(&Query::new("what's on my schedule today"), 1).await.unwrap();

        assert_eq!(decision.mode, SelectionMode::Hybrid);
        assert_eq!(decision.best().unwrap().name(), "calendar");
    }

    #[tokio::test]
    async fn test_route_reports_untrusted_selection() {
        let router = HybridToolRouter::new(catalog(), HybridConfig::default())
            .with_selector(Arc::new(StaticSelector::new(Some(AiSelection::new("nonexistent_tool", 0.8)))));
        let decision = router.route(&Query::new("find a file"), 1).await.unwrap();

        assert_eq!(decision.mode, SelectionMode::Lexical);
        assert_eq!(decision.ai.unwrap().tool_name, "nonexistent_tool");
        assert_eq!(decision.tools[0].score, 38.0);
    }

    #[tokio::test]
    async fn test_route_disabled_ai_skips_selector() {
        let mock = MockLlmClient::new().with_reply(r#"{"tool_name": "calendar", "confidence": 1.0, "reasoning": "x"}"#);
        let selector = Arc::new(LlmToolSelector::new(mock));
        let router =
            HybridToolRouter::new(catalog(), HybridConfig::lexical_only()).with_selector(selector.clone());

        let decision = router.route(&Query::new("find a file"), 1).await.unwrap();
        assert_eq!(decision.mode, SelectionMode::Lexical);
        assert!(decision.ai.is_none());
        assert!(selector.client().requests().is_empty());
    }

    #[tokio::test]
    async fn test_route_selector_failure_falls_back() {
        let selector = LlmToolSelector::new(MockLlmClient::new().with_failure("overloaded"));
        let router = HybridToolRouter::new(catalog(), HybridConfig::default()).with_selector(Arc::new(selector));

        let decision = router.route(&Query::new("find a file"), 1).await.unwrap();
        assert_eq!(decision.mode, SelectionMode::Lexical);
        assert_eq!(decision.best().unwrap().name(), "file_search");
    }

    #[tokio::test]
    async fn test_route_selector_timeout_falls_back() {
        let router = HybridToolRouter::new(catalog(), HybridConfig::default())
            .with_selector(Arc::new(SlowSelector))
            .with_ai_timeout(Duration::from_millis(20));

        let decision = router.route(&Query::new("find a file"), 1).await.unwrap();
        assert_eq!(decision.mode, SelectionMode::Lexical);
        assert!(decision.ai.is_none());
        assert_eq!(decision.best().unwrap().name(), "file_search");
    }

    #[tokio::test]
    async fn test_route_empty_catalog_skips_selector() {
        let mock = MockLlmClient::new();
        let selector = Arc::new(LlmToolSelector::new(mock));
        let router = HybridToolRouter::new(Arc::new(ToolCatalog::new()), HybridConfig::default())
            .with_selector(selector.clone());

        let decision = router.route(&Query::new("anything"), 5).await.unwrap();
        assert!(decision.tools.is_empty());
        assert!(selector.client().requests().is_empty());
    }

    #[tokio::test]
    async fn test_route_catalog_error_propagates() {
        let router = HybridToolRouter::new(Arc::new(BrokenCatalog), HybridConfig::default());
        let result = router.route(&Query::new("anything"), 5).await;
        assert!(matches!(result, Err(SelectorError::Catalog(_))));
    }

    #[tokio::test]
    async fn test_route_respects_gateway_filter() {
        let filtered = ToolCatalog::from_tools(catalog().all().to_vec()).with_filter(CatalogFilter {
            gateway: Some("google-workspace".to_string()),
        });
        let router = HybridToolRouter::new(Arc::new(filtered), HybridConfig::default());

        let decision = router.route(&Query::new("find a file"), 5).await.unwrap();
        assert!(decision.tools.is_empty());
    }
}

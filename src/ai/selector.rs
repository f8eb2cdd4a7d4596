//! AI selection providers.

use async_trait::async_trait;

use crate::error::{Result, SelectorError};
use crate::llm::{CompletionRequest, LlmClient};
use crate::prompt::build_selection_prompt;
use crate::tools::Tool;

use super::response::{AiSelection, parse_selection_response};

/// Picks at most one tool for a task.
///
/// `Ok(None)` means the provider answered but gave nothing usable. Errors
/// are for failed calls; callers treat both as "no AI result".
#[async_trait]
pub trait AiSelector: Send + Sync {
    async fn select(&self, task: &str, tools: &[Tool]) -> Result<Option<AiSelection>>;
}

/// Default token budget for the selection reply.
pub const DEFAULT_SELECTION_MAX_TOKENS: u32 = 256;

/// Asks an LLM to choose from the tool list.
pub struct LlmToolSelector<C: LlmClient> {
    client: C,
    max_tokens: u32,
}

impl<C: LlmClient> LlmToolSelector<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            max_tokens: DEFAULT_SELECTION_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: LlmClient> AiSelector for LlmToolSelector<C> {
    async fn select(&self, task: &str, tools: &[Tool]) -> Result<Option<AiSelection>> {
        let prompt = build_selection_prompt(task, tools)?;
        let response = self
            .client
            .complete(CompletionRequest::user(prompt, self.max_tokens))
            .await
            .map_err(|e| SelectorError::Llm(e.to_string()))?;

        let Some(text) = response.content else {
            log::debug!("{} returned no text for selection", self.client.model());
            return Ok(None);
        };

        let selection = parse_selection_response(&text);
        if let Some(selection) = &selection {
            log::debug!(
                "{} selected '{}' ({:.2}): {}",
                self.client.model(),
                selection.tool_name,
                selection.confidence,
                selection.reasoning
            );
        }
        Ok(selection)
    }
}

/// Returns the same answer for every task.
#[derive(Debug, Clone, Default)]
pub struct StaticSelector {
    selection: Option<AiSelection>,
}

impl StaticSelector {
    pub fn new(selection: Option<AiSelection>) -> Self {
        Self { selection }
    }
}

#[async_trait]
impl AiSelector for StaticSelector {
    async fn select(&self, _task: &str, _tools: &[Tool]) -> Result<Option<AiSelection>> {
        Ok(self.selection.clone())
    }
}

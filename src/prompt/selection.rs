//! Selection prompt construction.
//!
//! The prompt is built in two stages. First the user task and the tool list
//! are escaped and spliced into [`SELECTION_TEMPLATE`]; the result is still a
//! template. The final render fills `{format_instructions}` and collapses
//! the escapes, so braces typed by the user come out exactly as typed.

use crate::error::Result;
use crate::tools::Tool;

use super::render::PromptTemplate;

/// Descriptions longer than this are truncated in the tool list.
pub const MAX_DESCRIPTION_CHARS: usize = 150;

/// Characters kept from a truncated description, before the ellipsis.
pub const TRUNCATED_DESCRIPTION_CHARS: usize = 147;

/// Template for the AI selection prompt.
pub const SELECTION_TEMPLATE: &str = "You are a tool router. Pick the single tool that best accomplishes the user's task.

Task: {task}

Available tools:
{tool_list}

Use a tool name exactly as listed. {format_instructions}";

/// Response format the selection parser expects.
pub const FORMAT_INSTRUCTIONS: &str = r#"Respond with only a JSON object of the form {"tool_name": "<tool name>", "confidence": <number between 0 and 1>, "reasoning": "<at most 100 characters>"}."#;

/// Double every `{` and `}` so the text survives template rendering.
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// Cut descriptions over [`MAX_DESCRIPTION_CHARS`] down to
/// [`TRUNCATED_DESCRIPTION_CHARS`] plus `"..."`. Counts characters, not bytes.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description.to_string();
    }
    let mut truncated: String = description.chars().take(TRUNCATED_DESCRIPTION_CHARS).collect();
    truncated.push_str("...");
    truncated
}

/// One line per tool: `"{index}. {name}: {description}"`, 1-based.
pub fn format_tool_list(tools: &[Tool]) -> String {
    tools
        .iter()
        .enumerate()
        .map(|(i, tool)| format!("{}. {}: {}", i + 1, tool.name, truncate_description(&tool.description)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// First stage: task and tool list spliced in, escaped.
pub fn stage_selection_template(task: &str, tools: &[Tool]) -> Result<PromptTemplate> {
    let task = escape_braces(task);
    let tool_list = escape_braces(&format_tool_list(tools));
    PromptTemplate::new(SELECTION_TEMPLATE).render_partial(&[("task", &task), ("tool_list", &tool_list)])
}

/// Final prompt text sent to the AI provider.
pub fn build_selection_prompt(task: &str, tools: &[Tool]) -> Result<String> {
    stage_selection_template(task, tools)?.render(&[("format_instructions", FORMAT_INSTRUCTIONS)])
}

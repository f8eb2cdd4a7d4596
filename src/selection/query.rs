//! Query and mode types for a selection call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the user asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub task: String,
    #[serde(default)]
    pub context: String,
}

impl Query {
    /// Query with no extra context
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// Which scoring path a selection call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Raw lexical scores only
    Lexical,
    /// AI-selected tool blended, others discounted
    Hybrid,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - select: rank catalog tools for a task
//! - prompt: print the AI selection prompt for a task
//! - catalog: list catalog tools

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use toolsift::config::HybridConfig;

/// Toolsift - pick the right tool for a task
#[derive(Parser, Debug)]
#[command(name = "toolsift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank catalog tools for a task
    Select(SelectArgs),

    /// Print the AI selection prompt for a task
    Prompt {
        /// Task description
        task: String,

        /// Tool catalog (TOML)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List catalog tools
    Catalog {
        /// Tool catalog (TOML)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only tools owned by this gateway
        #[arg(short, long)]
        gateway: Option<String>,
    },
}

/// Arguments for `toolsift select`
#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// Task description
    pub task: String,

    /// Extra context folded into lexical scoring
    #[arg(long, default_value = "")]
    pub context: String,

    /// Maximum number of tools to return
    #[arg(short = 'n', long, default_value_t = 5)]
    pub top_n: usize,

    /// Tool catalog (TOML)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Use this tool as the AI answer instead of calling the provider
    #[arg(long, conflicts_with = "no_ai")]
    pub ai_tool: Option<String>,

    /// Confidence for --ai-tool
    #[arg(long, requires = "ai_tool", default_value_t = 1.0)]
    pub ai_confidence: f64,

    /// Lexical ranking only
    #[arg(long)]
    pub no_ai: bool,

    /// Show the lexical score breakdown per tool
    #[arg(short, long)]
    pub explain: bool,
}

impl SelectArgs {
    /// Scoring settings for this run: `--no-ai` turns the AI path off and
    /// `--ai-tool` turns it on, whatever the config file says.
    pub fn hybrid_config(&self, base: HybridConfig) -> HybridConfig {
        let mut hybrid = base;
        if self.no_ai {
            hybrid.ai_enabled = false;
        } else if self.ai_tool.is_some() {
            hybrid.ai_enabled = true;
        }
        hybrid
    }
}

//! CLI module for toolsift - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for ranking tools,
//! inspecting the AI prompt and listing the catalog.

pub mod commands;

pub use commands::Cli;

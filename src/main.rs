use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::{Commands, SelectArgs};
use toolsift::ai::{AiSelection, AiSelector, LlmToolSelector, StaticSelector};
use toolsift::config::SelectorConfig;
use toolsift::llm::{AnthropicClient, AnthropicConfig};
use toolsift::prompt::build_selection_prompt;
use toolsift::router::{HybridToolRouter, RoutingDecision};
use toolsift::scoring::lexical_breakdown;
use toolsift::selection::{Query, SelectionMode};
use toolsift::tools::{CatalogFilter, CatalogProvider, ToolCatalog};

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolsift")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolsift.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none()
        && let Some(level) = level
    {
        builder.parse_filters(level);
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &SelectorConfig) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Select(args) => handle_select_command(args, config, cli.is_verbose()).await,
        Commands::Prompt { task, catalog } => handle_prompt_command(task, catalog.as_ref(), config),
        Commands::Catalog { catalog, gateway } => {
            handle_catalog_command(catalog.as_ref(), gateway.as_deref(), config)
        }
    }
}

/// Catalog from the CLI path or the configured one, with the gateway filter applied
fn load_catalog(path: Option<&PathBuf>, gateway: Option<&str>, config: &SelectorConfig) -> Result<ToolCatalog> {
    let path = path
        .or(config.catalog.path.as_ref())
        .ok_or_else(|| eyre::eyre!("No tool catalog given; pass --catalog or set catalog.path in the config"))?;

    let catalog = ToolCatalog::from_file(path).context(format!("Failed to load catalog {}", path.display()))?;
    info!("Loaded {} tools from {}", catalog.len(), path.display());

    let gateway = gateway.map(str::to_string).or_else(|| config.catalog.gateway.clone());
    Ok(catalog.with_filter(CatalogFilter { gateway }))
}

/// Selector for this run: a fixed answer from the CLI, the configured provider, or none
fn build_selector(args: &SelectArgs, config: &SelectorConfig, verbose: bool) -> Option<Arc<dyn AiSelector>> {
    if let Some(name) = &args.ai_tool {
        let selection = AiSelection::new(name.clone(), args.ai_confidence).with_reasoning("given on the command line");
        return Some(Arc::new(StaticSelector::new(Some(selection))));
    }

    match AnthropicClient::from_env(&config.llm.api_key_env, AnthropicConfig::from(&config.llm)) {
        Ok(client) => {
            info!("Using {} for AI selection", config.llm.model);
            Some(Arc::new(LlmToolSelector::new(client).with_max_tokens(config.llm.max_tokens)))
        }
        Err(e) => {
            log::warn!("AI selection unavailable: {}", e);
            if verbose {
                println!("{} {}", "AI selection unavailable:".yellow(), e);
            }
            None
        }
    }
}

async fn handle_select_command(args: &SelectArgs, config: &SelectorConfig, verbose: bool) -> Result<()> {
    info!("Selecting tools for: {}", args.task);
    let catalog = load_catalog(args.catalog.as_ref(), None, config)?;

    let hybrid = args.hybrid_config(config.hybrid);
    if hybrid.ai_enabled != config.hybrid.ai_enabled {
        info!("AI selection {} by command line", if hybrid.ai_enabled { "enabled" } else { "disabled" });
    }

    let mut router = HybridToolRouter::new(Arc::new(catalog), hybrid).with_ai_timeout(config.llm.timeout());
    if hybrid.ai_enabled
        && let Some(selector) = build_selector(args, config, verbose)
    {
        router = router.with_selector(selector);
    }

    let query = Query::new(args.task.clone()).with_context(args.context.clone());
    let decision = router.route(&query, args.top_n).await?;
    print_decision(&decision, &query, args.explain);
    Ok(())
}

fn print_decision(decision: &RoutingDecision, query: &Query, explain: bool) {
    match (&decision.ai, decision.mode) {
        (Some(ai), SelectionMode::Hybrid) => println!(
            "{} {} (AI picked {} at {:.2})",
            "Mode:".green(),
            decision.mode,
            ai.tool_name.cyan(),
            ai.confidence
        ),
        (Some(ai), SelectionMode::Lexical) => println!(
            "{} {} (ignored AI pick {} at {:.2})",
            "Mode:".green(),
            decision.mode,
            ai.tool_name.yellow(),
            ai.confidence
        ),
        (None, mode) => println!("{} {}", "Mode:".green(), mode),
    }

    if decision.tools.is_empty() {
        println!("{}", "No matching tools".yellow());
        return;
    }

    for (rank, scored) in decision.tools.iter().enumerate() {
        println!(
            "{:>3}. {} {:.3}  {}",
            rank + 1,
            scored.name().cyan().bold(),
            scored.score,
            scored.tool.description.dimmed()
        );
        if explain {
            let b = lexical_breakdown(&query.task, &query.context, &scored.tool);
            println!(
                "     name {:.1} + description {:.1} + gateway {:.1} + partial name {:.1} + partial description {:.1} = {:.1}",
                b.name_exact,
                b.description_exact,
                b.gateway_exact,
                b.name_partial,
                b.description_partial,
                b.total()
            );
        }
    }
}

fn handle_prompt_command(task: &str, catalog: Option<&PathBuf>, config: &SelectorConfig) -> Result<()> {
    info!("Building selection prompt for: {}", task);
    let catalog = load_catalog(catalog, None, config)?;
    let tools = catalog.tools(&Query::new(task))?;
    let prompt = build_selection_prompt(task, &tools)?;
    println!("{}", prompt);
    Ok(())
}

fn handle_catalog_command(catalog: Option<&PathBuf>, gateway: Option<&str>, config: &SelectorConfig) -> Result<()> {
    info!("Listing catalog (gateway: {:?})", gateway);
    let catalog = load_catalog(catalog, gateway, config)?;
    let tools = catalog.tools(&Query::default())?;

    if tools.is_empty() {
        println!("{}", "No tools".yellow());
        return Ok(());
    }

    for tool in &tools {
        if tool.gateway_slug.is_empty() {
            println!("{}: {}", tool.name.cyan(), tool.description);
        } else {
            println!("{} [{}]: {}", tool.name.cyan(), tool.gateway_slug.dimmed(), tool.description);
        }
    }
    println!("{} {}", tools.len(), if tools.len() == 1 { "tool" } else { "tools" });
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = SelectorConfig::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Logging level may come from the config file
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}

//! Orientador CLI - vocational guidance assistant.

use clap::Parser;
use orientador_agent::Agent;
use orientador_catalog::Catalog;
use orientador_cli::commands;
use orientador_cli::repl;
use orientador_cli::{Cli, Command, Config, Formatter};
use orientador_llm::OllamaProvider;
use orientador_tools::ToolRegistry;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> orientador_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // An explicit config file must load; the default one falls back to defaults
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Ignoring configuration file: {}", e);
            Config::default()
        }),
    };
    if cli.config.is_none() && Config::path().map(|p| !p.exists()).unwrap_or(false) {
        config.save().ok();
    }

    if let Some(document) = cli.document {
        config.document.path = document;
    }
    if let Some(model) = cli.model {
        config.llm.model = model;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let document = config.document_path()?;
    debug!("Using document {}", document.display());
    let registry = ToolRegistry::new(Catalog::from_path(document, config.document.limits.clone()));

    match cli.command {
        Some(Command::Tool(args)) => commands::execute_tool(args, &registry, &formatter)?,
        Some(Command::Tools) => commands::execute_tools(&registry, &formatter)?,
        Some(Command::Stats) => commands::execute_stats(registry.catalog(), &formatter)?,
        command => {
            // Everything else talks to the model
            let model = OllamaProvider::from_config(&config.llm)?;
            let mut agent = Agent::new(model, registry, config.agent.clone());

            match command {
                Some(Command::Ask(args)) => {
                    commands::execute_ask(args, &mut agent, &formatter).await?;
                }
                _ => {
                    repl::run_repl(&mut agent, config.settings.history_size, &formatter).await?;
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

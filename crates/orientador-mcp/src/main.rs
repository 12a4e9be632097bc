//! Orientador MCP Server - Main entry point

use anyhow::Result;
use orientador_catalog::{resolve_document_path, Catalog, CatalogConfig};
use orientador_mcp::McpServer;
use orientador_tools::ToolRegistry;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DOCUMENT: &str = "data/universidades.pdf";

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let document = env::var("ORIENTADOR_DOCUMENT").unwrap_or_else(|_| DEFAULT_DOCUMENT.to_string());
    let install_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));
    let path = resolve_document_path(
        &PathBuf::from(document),
        install_dir.as_deref(),
        &env::current_dir()?,
    );
    info!("Serving document {}", path.display());

    let catalog = Catalog::from_path(path, CatalogConfig::default());
    let mut server = McpServer::new(ToolRegistry::new(catalog));
    server.run()?;
    Ok(())
}

//! MCP server exposing Riot Games lookups as agent tools.
//!
//! Five tools, each a single authenticated GET against the Riot API followed
//! by a compact text summary: player-id lookup, champion masteries, newest
//! match ids, match detail, and a match timeline event log. The server speaks
//! MCP over stdio; diagnostics go to stderr.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod summary;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use rmcp::service::serve_server;
use rmcp::transport;
use server::RiotService;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "riot-mcp", version)]
#[command(about = "MCP server for Riot account, mastery, and match lookups", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server over stdio (the default)
    Serve,
}

pub fn run() -> Result<()> {
    // stdout carries the MCP wire protocol; logs must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(),
    }
}

fn serve() -> Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    let service = RiotService::new(config)?;

    let rt = Runtime::new()?;
    rt.block_on(async {
        let running = serve_server(service, transport::stdio())
            .await
            .map_err(|e| anyhow!("failed to start server: {e}"))?;
        tracing::info!("riot-mcp serving over stdio");
        running
            .waiting()
            .await
            .map_err(|e| anyhow!("server task ended: {e}"))?;
        Ok(())
    })
}

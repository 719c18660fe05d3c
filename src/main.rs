//! isitdown MCP Server - Rust Implementation
//!
//! A Model Context Protocol (MCP) server that checks whether a website is up
//! or down by scraping isitdownrightnow.com.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use isitdown_mcp_server::config::Config;
use isitdown_mcp_server::error::Result;
use isitdown_mcp_server::mcp::server::McpServer;
use isitdown_mcp_server::status::checker::StatusChecker;

/// isitdown MCP Server
#[derive(Parser)]
#[command(name = "isitdown-mcp-server")]
#[command(author, version, about = "isitdown MCP Server - check whether a website is up or down")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single domain and print the result (no MCP client needed)
    Check {
        /// Root domain to check, e.g. example.com
        domain: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::new();
    let status_checker = Arc::new(StatusChecker::new(config)?);

    match cli.command {
        Some(Commands::Check { domain }) => {
            println!("{}", status_checker.check_status(&domain).await);
        }
        None => {
            let mut server = McpServer::new(status_checker);
            server.run_stdio().await?;
        }
    }

    Ok(())
}

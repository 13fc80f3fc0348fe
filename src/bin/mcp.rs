//! Todo MCP server binary (stdio transport).
//!
//! Speaks MCP over stdin/stdout and forwards every tool call to the REST
//! API server. Logs go to stderr since stdout carries the protocol.

use clap::Parser;
use miette::Diagnostic;
use rmcp::{ServiceExt, service::ServerInitializeError, transport::stdio};
use thiserror::Error;
use todo_mcp::api::DEFAULT_LOG_FILTER;
use todo_mcp::client::ApiClient;
use todo_mcp::mcp::McpServer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Failed to start MCP server over stdio: {0}")]
    #[diagnostic(code(todo::binary::mcp_init))]
    Init(#[from] ServerInitializeError),

    #[error("MCP server terminated unexpectedly: {0}")]
    #[diagnostic(code(todo::binary::mcp_join))]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Parser)]
#[command(name = "todo-mcp")]
#[command(author, version, about = "Todo MCP server over stdio", long_about = None)]
struct Cli {
    /// API server URL (defaults to API_BASE_URL, then http://localhost:3000)
    #[arg(long)]
    api_url: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    init_tracing();

    let client = ApiClient::new(cli.api_url);
    info!(api_url = client.base_url(), "todo MCP server started");

    let service = McpServer::<ApiClient>::new(client)
        .serve(stdio())
        .await?;
    let reason = service.waiting().await?;
    info!(?reason, "todo MCP server stopped");

    Ok(())
}

//! Todo API server binary.
//!
//! Creates the in-memory store and hands it to the API server, which also
//! serves the MCP tools at `/mcp`.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todo_mcp::api::{self, ApiError, Config};
use todo_mcp::store::TodoStore;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(todo::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todo-api")]
#[command(author, version, about = "Todo REST API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    // State lives only as long as the process
    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        TodoStore::new(),
    )
    .await?;

    Ok(())
}

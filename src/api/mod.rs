//! REST API server.
//!
//! Serves the todo CRUD routes, the embedded `/tools` endpoints and the
//! MCP Streamable HTTP service at `/mcp`, all over one in-memory store.

mod handlers;
pub mod routes;
mod state;


use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::mcp::create_mcp_service;
use crate::store::TodoStore;

pub use state::AppState;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todo_mcp=debug,tower_http=debug";

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(todo::api::bind),
        help("Is another process already listening on this port?")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(todo::api::serve))]
    Serve(#[from] std::io::Error),
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    // try_init: a second call (tests, embedding) is not an error
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Build the full application: REST routes plus the MCP service at `/mcp`.
///
/// The MCP sessions stop when `ct` is cancelled.
pub fn app(state: AppState, ct: CancellationToken) -> Router {
    let mcp_service = create_mcp_service::<TodoStore>(state.store_arc(), ct);

    routes::create_router(state)
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http())
}

/// Run the API server with the given configuration
///
/// Serves until Ctrl+C, then cancels the open MCP sessions.
pub async fn run(config: Config, store: impl Into<Arc<TodoStore>>) -> Result<(), ApiError> {
    init_tracing();

    let ct = CancellationToken::new();
    let app = app(AppState::new(store), ct.clone());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);
    info!("OpenAPI docs at http://{}/docs", addr);
    info!("MCP endpoint at http://{}/mcp", addr);

    let shutdown = ct.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}

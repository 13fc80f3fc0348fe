//! MCP Streamable HTTP service creation
//!
//! This module provides functions to create the MCP service
//! that can be integrated with an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::backend::TodoBackend;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// # Arguments
/// * `backend` - Backend the tools operate on
/// * `cancellation_token` - Token for graceful shutdown
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use todo_mcp::store::TodoStore;
/// # use todo_mcp::mcp::create_mcp_service;
///
/// let store = Arc::new(TodoStore::new());
/// let mcp_service = create_mcp_service::<TodoStore>(store, CancellationToken::new());
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// ```
pub fn create_mcp_service<B: TodoBackend + 'static>(
    backend: impl Into<Arc<B>>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<B>, LocalSessionManager> {
    let backend = backend.into();

    // One McpServer per session, all sharing the same backend
    let service_factory = move || -> Result<McpServer<B>, std::io::Error> {
        Ok(McpServer::new(Arc::clone(&backend)))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

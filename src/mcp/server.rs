//! MCP server implementation
//!
//! `tools/list` serves the catalog of [`TodoTools`] and `tools/call` goes
//! through [`TodoTools::invoke`], so the protocol surface and the embedded
//! `/tools/invoke` endpoint share one dispatch path.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParams, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
};
use serde_json::Value;

use super::tools::TodoTools;
use crate::backend::TodoBackend;

const INSTRUCTIONS: &str = "Todo MCP Server - Manage todo lists and their items. \
Use get_all_lists to find list IDs, get_list_items to see the items of a list, \
and toggle_item_done to mark items as done. IDs are integers.";

/// Main MCP server coordinator
///
/// Generic over `B: TodoBackend` for zero-cost abstraction (no dynamic dispatch).
pub struct McpServer<B: TodoBackend> {
    tools: TodoTools<B>,
}

impl<B: TodoBackend> Clone for McpServer<B> {
    fn clone(&self) -> Self {
        Self {
            tools: self.tools.clone(),
        }
    }
}

impl<B: TodoBackend + 'static> McpServer<B> {
    /// Create a new MCP server over the given backend
    pub fn new(backend: impl Into<Arc<B>>) -> Self {
        Self {
            tools: TodoTools::new(backend.into()),
        }
    }

    /// The tool table this server dispatches to
    pub fn tools(&self) -> &TodoTools<B> {
        &self.tools
    }
}

impl<B: TodoBackend + 'static> ServerHandler for McpServer<B> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(
                Implementation::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                    .with_title("Todo MCP Server"),
            )
            .with_instructions(INSTRUCTIONS)
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult::with_all_items(self.tools.catalog()))
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);
            self.tools.invoke(&request.name, arguments).await
        }
    }
}

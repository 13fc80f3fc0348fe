//! Model Context Protocol (MCP) adapter
//!
//! Exposes the todo operations as MCP tools over two transports:
//!
//! - stdio, for the standalone `todo-mcp` process (backend: [`ApiClient`])
//! - Streamable HTTP, nested into the API server (backend: [`TodoStore`])
//!
//! # Architecture
//!
//! - **server**: `ServerHandler` wiring `tools/list` and `tools/call`
//! - **service**: Streamable HTTP service factory
//! - **tools**: the tool table, argument validation and error mapping
//!
//! [`ApiClient`]: crate::client::ApiClient
//! [`TodoStore`]: crate::store::TodoStore

pub mod server;
mod service;
pub mod tools;


pub use server::McpServer;
pub use service::create_mcp_service;

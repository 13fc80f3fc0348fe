pub mod api;
pub mod backend;
pub mod client;
pub mod error;
pub mod mcp;
pub mod store;

#[cfg(test)]
mod error_test;

/// Greeting served at `/`
pub fn banner() -> &'static str {
    "Todo API with MCP tools. See /docs for the API reference."
}

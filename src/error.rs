//! Error types shared by the store, the backends and the MCP adapter.
//!
//! Uses miette for diagnostic output and thiserror for the derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by todo operations, whichever front end or backend runs them.
#[derive(Error, Diagnostic, Debug)]
pub enum TodoError {
    #[error("{entity_type} with id {id} not found")]
    #[diagnostic(code(todo::not_found))]
    NotFound { entity_type: &'static str, id: u64 },

    #[error("Invalid arguments for '{tool}': {}", problems.join("; "))]
    #[diagnostic(
        code(todo::validation),
        help("Check the tool's inputSchema for required fields and their types.")
    )]
    Validation { tool: String, problems: Vec<String> },

    #[error("Upstream error: {status} {status_text} - {body}")]
    #[diagnostic(code(todo::upstream))]
    Upstream {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Unknown operation: {name}")]
    #[diagnostic(code(todo::unknown_operation))]
    UnknownOperation { name: String },

    #[error("Failed to connect to API server")]
    #[diagnostic(
        code(todo::connection_failed),
        help(
            "Is the API server running? Try: todo-api --port 3000\nOr set API_BASE_URL to point to the correct server."
        )
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from API server: {message}")]
    #[diagnostic(code(todo::invalid_response))]
    InvalidResponse { message: String },
}

impl TodoError {
    pub fn list_not_found(id: u64) -> Self {
        TodoError::NotFound {
            entity_type: "List",
            id,
        }
    }

    pub fn item_not_found(id: u64) -> Self {
        TodoError::NotFound {
            entity_type: "Item",
            id,
        }
    }

    /// True when the error means the referenced record does not exist,
    /// whether the store said so directly or the REST layer answered 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            TodoError::NotFound { .. } => true,
            TodoError::Upstream { status, .. } => *status == 404,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for TodoError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            TodoError::ConnectionFailed { source: e }
        } else {
            TodoError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(e: serde_json::Error) -> Self {
        TodoError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

/// Result type for todo operations.
pub type TodoResult<T> = Result<T, TodoError>;

//! MCP tool implementations
//!
//! - `todos`: the todo tool table and its dispatcher
//! - `validate`: argument checks against a tool's input schema

mod todos;
mod validate;


pub use todos::*;
pub use validate::validate_arguments;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, ErrorCode},
};
use serde::Serialize;
use serde_json::json;

use crate::error::TodoError;

/// Map a todo error onto an MCP error.
///
/// Missing records (including a 404 from the REST layer) become
/// resource-not-found, bad arguments invalid-params, unknown tools
/// method-not-found. Everything else is an internal error.
pub(crate) fn map_todo_error(e: TodoError) -> McpError {
    let message = e.to_string();
    let not_found = e.is_not_found();
    match e {
        TodoError::NotFound { entity_type, id } => McpError::resource_not_found(
            message,
            Some(json!({"entity_type": entity_type, "id": id})),
        ),
        TodoError::Validation { problems, .. } => {
            McpError::invalid_params(message, Some(json!({"problems": problems})))
        }
        TodoError::Upstream {
            status,
            status_text,
            body,
        } => {
            let data = Some(json!({
                "status": status,
                "status_text": status_text,
                "body": body,
            }));
            if not_found {
                McpError::resource_not_found(message, data)
            } else {
                McpError::internal_error(message, data)
            }
        }
        TodoError::UnknownOperation { name } => {
            McpError::new(ErrorCode::METHOD_NOT_FOUND, message, Some(json!({"name": name})))
        }
        TodoError::ConnectionFailed { .. } | TodoError::InvalidResponse { .. } => {
            McpError::internal_error(message, None)
        }
    }
}

/// Wrap a record as a text block: a headline, then the pretty-printed JSON.
pub(crate) fn text_result<T: Serialize>(
    headline: &str,
    value: &T,
) -> Result<CallToolResult, McpError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(json!({"error": e.to_string()})),
        )
    })?;

    Ok(CallToolResult::success(vec![Content::text(format!(
        "{}:\n{}",
        headline, content
    ))]))
}

//! Embedded tool discovery and invocation.
//!
//! The same tool table as the MCP server, reachable with plain JSON:
//! `GET /tools` lists the catalog, `POST /tools/invoke` runs
//! `{function, arguments}` against the in-process store.

use axum::{Json, extract::State, http::StatusCode};
use rmcp::model::{ErrorCode, RawContent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;

use super::{ErrorResponse, HandlerError};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    #[schema(example = "create_item")]
    pub name: String,
    #[schema(example = "Create a new item in a todo list")]
    pub description: Option<String>,
    /// JSON schema of the tool arguments
    #[schema(value_type = Object)]
    pub input_schema: Value,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct InvokeToolRequest {
    /// Tool name, as listed by `GET /tools`
    #[schema(example = "create_item")]
    pub function: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub arguments: Value,
}

#[derive(Serialize, ToSchema)]
pub struct ToolContent {
    #[serde(rename = "type")]
    #[schema(example = "text")]
    pub kind: String,
    pub text: String,
}

#[derive(Serialize, ToSchema)]
pub struct ToolResultResponse {
    pub content: Vec<ToolContent>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    responses(
        (status = 200, description = "Tool catalog", body = Vec<ToolDescriptor>)
    )
)]
#[instrument(skip(state))]
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    let tools = state
        .tools()
        .catalog()
        .into_iter()
        .map(|t| ToolDescriptor {
            name: t.name.to_string(),
            description: t.description.map(|d| d.to_string()),
            input_schema: Value::Object(t.input_schema.as_ref().clone()),
        })
        .collect();

    Json(tools)
}

#[utoipa::path(
    post,
    path = "/tools/invoke",
    tag = "tools",
    request_body = InvokeToolRequest,
    responses(
        (status = 200, description = "Tool result", body = ToolResultResponse),
        (status = 400, description = "Invalid arguments", body = ErrorResponse),
        (status = 404, description = "Unknown tool, or referenced record not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn invoke_tool(
    State(state): State<AppState>,
    Json(req): Json<InvokeToolRequest>,
) -> Result<Json<ToolResultResponse>, HandlerError> {
    let result = state
        .tools()
        .invoke(&req.function, req.arguments)
        .await
        .map_err(|e| {
            let status = if e.code == ErrorCode::INVALID_PARAMS {
                StatusCode::BAD_REQUEST
            } else if e.code == ErrorCode::METHOD_NOT_FOUND
                || e.code == ErrorCode::RESOURCE_NOT_FOUND
            {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.message.to_string(),
                }),
            )
        })?;

    let content = result
        .content
        .into_iter()
        .filter_map(|c| match c.raw {
            RawContent::Text(text) => Some(ToolContent {
                kind: "text".to_string(),
                text: text.text,
            }),
            _ => None,
        })
        .collect();

    Ok(Json(ToolResultResponse { content }))
}

//! REST handlers.

mod todo_items;
mod todo_lists;
mod tools;

#[cfg(test)]
mod todo_items_test;
#[cfg(test)]
mod todo_lists_test;

pub use todo_items::*;
pub use todo_lists::*;
pub use tools::*;

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::error::TodoError;

/// Error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "List with id 1 not found")]
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

pub(crate) type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Convert a todo error into a status code and JSON error body.
pub(crate) fn error_response(e: TodoError) -> HandlerError {
    let status = match &e {
        TodoError::NotFound { .. } | TodoError::UnknownOperation { .. } => StatusCode::NOT_FOUND,
        TodoError::Validation { .. } => StatusCode::BAD_REQUEST,
        TodoError::Upstream { .. }
        | TodoError::ConnectionFailed { .. }
        | TodoError::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses((status = 200, description = "Service banner", body = String))
)]
#[instrument]
pub async fn root() -> &'static str {
    crate::banner()
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

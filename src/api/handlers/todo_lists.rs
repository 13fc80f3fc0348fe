//! Todo list handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::error::TodoError;
use crate::store::{ListId, TodoList};

use super::{ErrorResponse, HandlerError, error_response};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct TodoListResponse {
    #[schema(example = 1)]
    pub id: ListId,
    #[schema(example = "groceries")]
    pub name: String,
}

impl From<TodoList> for TodoListResponse {
    fn from(l: TodoList) -> Self {
        Self {
            id: l.id,
            name: l.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoListRequest {
    #[schema(example = "groceries")]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTodoListRequest {
    #[schema(example = "weekly groceries")]
    pub name: String,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/todolists",
    tag = "todolists",
    responses(
        (status = 200, description = "All todo lists in creation order", body = Vec<TodoListResponse>)
    )
)]
#[instrument(skip(state))]
pub async fn list_todo_lists(State(state): State<AppState>) -> Json<Vec<TodoListResponse>> {
    Json(
        state
            .store()
            .list_all()
            .into_iter()
            .map(TodoListResponse::from)
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/todolists/{id}",
    tag = "todolists",
    params(("id" = u64, Path, description = "List ID")),
    responses(
        (status = 200, description = "Todo list found", body = TodoListResponse),
        (status = 404, description = "Todo list not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_todo_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
) -> Result<Json<TodoListResponse>, HandlerError> {
    let list = state
        .store()
        .get_list(id)
        .ok_or_else(|| error_response(TodoError::list_not_found(id)))?;

    Ok(Json(TodoListResponse::from(list)))
}

#[utoipa::path(
    post,
    path = "/todolists",
    tag = "todolists",
    request_body = CreateTodoListRequest,
    responses(
        (status = 201, description = "Todo list created", body = TodoListResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_todo_list(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoListRequest>,
) -> (StatusCode, Json<TodoListResponse>) {
    let list = state.store().create_list(req.name);

    (StatusCode::CREATED, Json(TodoListResponse::from(list)))
}

#[utoipa::path(
    put,
    path = "/todolists/{id}",
    tag = "todolists",
    params(("id" = u64, Path, description = "List ID")),
    request_body = UpdateTodoListRequest,
    responses(
        (status = 200, description = "Todo list renamed", body = TodoListResponse),
        (status = 404, description = "Todo list not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_todo_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
    Json(req): Json<UpdateTodoListRequest>,
) -> Result<Json<TodoListResponse>, HandlerError> {
    let list = state
        .store()
        .update_list(id, req.name)
        .ok_or_else(|| error_response(TodoError::list_not_found(id)))?;

    Ok(Json(TodoListResponse::from(list)))
}

#[utoipa::path(
    delete,
    path = "/todolists/{id}",
    tag = "todolists",
    params(("id" = u64, Path, description = "List ID")),
    responses(
        (status = 204, description = "Todo list deleted, or did not exist")
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
) -> StatusCode {
    // Items of the list are kept
    state.store().delete_list(id);

    StatusCode::NO_CONTENT
}

//! Todo item handlers.

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
use crate::store::{ItemId, ListId, TodoItem};

use super::{ErrorResponse, HandlerError, error_response};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemResponse {
    #[schema(example = 1)]
    pub id: ItemId,
    #[schema(example = "milk")]
    pub description: String,
    #[schema(example = false)]
    pub done: bool,
    /// List the item was created in
    #[schema(example = 1)]
    pub list_id: ListId,
}

impl From<TodoItem> for TodoItemResponse {
    fn from(i: TodoItem) -> Self {
        Self {
            id: i.id,
            description: i.description,
            done: i.done,
            list_id: i.list_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoItemRequest {
    #[schema(example = "milk")]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemDescriptionRequest {
    #[schema(example = "oat milk")]
    pub description: String,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/lists/{id}/items",
    tag = "items",
    params(("id" = u64, Path, description = "List ID")),
    responses(
        (status = 200, description = "Items of the list", body = Vec<TodoItemResponse>),
        (status = 404, description = "Todo list not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
    Path(list_id): Path<ListId>,
) -> Result<Json<Vec<TodoItemResponse>>, HandlerError> {
    let items = state
        .store()
        .items_for_list(list_id)
        .map_err(error_response)?;

    Ok(Json(items.into_iter().map(TodoItemResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/lists/{id}/items",
    tag = "items",
    params(("id" = u64, Path, description = "List ID")),
    request_body = CreateTodoItemRequest,
    responses(
        (status = 201, description = "Item created", body = TodoItemResponse),
        (status = 404, description = "Todo list not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_item(
    State(state): State<AppState>,
    Path(list_id): Path<ListId>,
    Json(req): Json<CreateTodoItemRequest>,
) -> Result<(StatusCode, Json<TodoItemResponse>), HandlerError> {
    let item = state
        .store()
        .create_item_in_list(list_id, req.description)
        .ok_or_else(|| error_response(TodoError::list_not_found(list_id)))?;

    Ok((StatusCode::CREATED, Json(TodoItemResponse::from(item))))
}

#[utoipa::path(
    patch,
    path = "/items/{id}/description",
    tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    request_body = UpdateItemDescriptionRequest,
    responses(
        (status = 200, description = "Description replaced", body = TodoItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_item_description(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(req): Json<UpdateItemDescriptionRequest>,
) -> Result<Json<TodoItemResponse>, HandlerError> {
    let item = state
        .store()
        .update_item_description(id, req.description)
        .ok_or_else(|| error_response(TodoError::item_not_found(id)))?;

    Ok(Json(TodoItemResponse::from(item)))
}

#[utoipa::path(
    patch,
    path = "/items/{id}/toggle-done",
    tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Done flag flipped", body = TodoItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn toggle_item_done(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<TodoItemResponse>, HandlerError> {
    let item = state
        .store()
        .toggle_item_done(id)
        .ok_or_else(|| error_response(TodoError::item_not_found(id)))?;

    Ok(Json(TodoItemResponse::from(item)))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<StatusCode, HandlerError> {
    state
        .store()
        .delete_item(id)
        .ok_or_else(|| error_response(TodoError::item_not_found(id)))?;

    Ok(StatusCode::NO_CONTENT)
}

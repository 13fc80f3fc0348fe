//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, patch, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateTodoItemRequest, CreateTodoListRequest, ErrorResponse, HealthResponse,
    InvokeToolRequest, TodoItemResponse, TodoListResponse, ToolContent, ToolDescriptor,
    ToolResultResponse, UpdateItemDescriptionRequest, UpdateTodoListRequest,
};
use super::state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "In-memory todo lists and items, with an MCP tool adapter",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_todo_lists,
        handlers::get_todo_list,
        handlers::create_todo_list,
        handlers::update_todo_list,
        handlers::delete_todo_list,
        handlers::list_items,
        handlers::create_item,
        handlers::update_item_description,
        handlers::toggle_item_done,
        handlers::delete_item,
        handlers::list_tools,
        handlers::invoke_tool,
    ),
    components(
        schemas(
            HealthResponse,
            TodoListResponse,
            CreateTodoListRequest,
            UpdateTodoListRequest,
            TodoItemResponse,
            CreateTodoItemRequest,
            UpdateItemDescriptionRequest,
            ToolDescriptor,
            InvokeToolRequest,
            ToolContent,
            ToolResultResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "todolists", description = "Todo list management endpoints"),
        (name = "items", description = "Todo item management endpoints"),
        (name = "tools", description = "Embedded tool discovery and invocation")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
///
/// The MCP Streamable HTTP service is nested separately by [`super::run`],
/// since it needs a cancellation token tied to server shutdown.
pub fn create_router(state: AppState) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    let list_routes = Router::new()
        .route(
            "/todolists",
            get(handlers::list_todo_lists).post(handlers::create_todo_list),
        )
        .route(
            "/todolists/{id}",
            get(handlers::get_todo_list)
                .put(handlers::update_todo_list)
                .delete(handlers::delete_todo_list),
        );

    let item_routes = Router::new()
        .route(
            "/lists/{id}/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/{id}/description",
            patch(handlers::update_item_description),
        )
        .route("/items/{id}/toggle-done", patch(handlers::toggle_item_done))
        .route("/items/{id}", delete(handlers::delete_item));

    let tool_routes = Router::new()
        .route("/tools", get(handlers::list_tools))
        .route("/tools/invoke", post(handlers::invoke_tool));

    system_routes
        .merge(list_routes)
        .merge(item_routes)
        .merge(tool_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}

//! MCP tools for todo lists and items.
//!
//! `TodoTools` is the single tool table: the catalog comes from the `#[tool]`
//! attributes below, and [`TodoTools::invoke`] dispatches by name to the same
//! methods after validating the arguments against that catalog.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use super::validate::validate_arguments;
use crate::backend::TodoBackend;
use crate::error::TodoError;
use crate::mcp::tools::{map_todo_error, text_result};
use crate::store::{ItemId, ListId};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "Name of the list")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetListParams {
    #[schemars(description = "List ID")]
    pub list_id: ListId,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListParams {
    #[schemars(description = "List ID")]
    pub list_id: ListId,
    #[schemars(description = "New name of the list")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteListParams {
    #[schemars(description = "ID of the list to delete")]
    pub list_id: ListId,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetListItemsParams {
    #[schemars(description = "List ID")]
    pub list_id: ListId,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemParams {
    #[schemars(description = "ID of the list the item belongs to")]
    pub list_id: ListId,
    #[schemars(description = "Item description")]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDescriptionParams {
    #[schemars(description = "Item ID")]
    pub item_id: ItemId,
    #[schemars(description = "New item description (replaces the old one)")]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleItemDoneParams {
    #[schemars(description = "Item ID")]
    pub item_id: ItemId,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemParams {
    #[schemars(description = "ID of the item to delete")]
    pub item_id: ItemId,
}

// =============================================================================
// Todo Tools
// =============================================================================

/// Todo list and item tools.
///
/// Generic over `B: TodoBackend`: the in-process store when embedded in the
/// API server, the HTTP client when running as a standalone MCP process.
pub struct TodoTools<B: TodoBackend> {
    backend: Arc<B>,
    tool_router: ToolRouter<Self>,
}

impl<B: TodoBackend> Clone for TodoTools<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_router]
impl<B: TodoBackend + 'static> TodoTools<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            tool_router: Self::tool_router(),
        }
    }

    /// The tool catalog, sorted by name.
    pub fn catalog(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Dispatch a tool call by name.
    ///
    /// Unknown names fail with method-not-found. Arguments are checked
    /// against the tool's input schema before anything runs; every failing
    /// field is reported.
    #[instrument(skip(self, arguments))]
    pub async fn invoke(&self, name: &str, arguments: Value) -> Result<CallToolResult, McpError> {
        let tool = self.tool_router.get(name).ok_or_else(|| {
            map_todo_error(TodoError::UnknownOperation {
                name: name.to_string(),
            })
        })?;

        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        validate_arguments(tool, &arguments).map_err(map_todo_error)?;

        match name {
            "create_list" => self.create_list(parse(name, arguments)?).await,
            "get_all_lists" => self.get_all_lists().await,
            "get_list" => self.get_list(parse(name, arguments)?).await,
            "update_list" => self.update_list(parse(name, arguments)?).await,
            "delete_list" => self.delete_list(parse(name, arguments)?).await,
            "get_list_items" => self.get_list_items(parse(name, arguments)?).await,
            "create_item" => self.create_item(parse(name, arguments)?).await,
            "update_item_description" => {
                self.update_item_description(parse(name, arguments)?).await
            }
            "toggle_item_done" => self.toggle_item_done(parse(name, arguments)?).await,
            "delete_item" => self.delete_item(parse(name, arguments)?).await,
            _ => Err(map_todo_error(TodoError::UnknownOperation {
                name: name.to_string(),
            })),
        }
    }

    // -------------------------------------------------------------------------
    // Lists
    // -------------------------------------------------------------------------

    #[tool(description = "Create a new todo list")]
    pub async fn create_list(
        &self,
        params: Parameters<CreateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let list = self
            .backend
            .create_list(params.0.name)
            .await
            .map_err(map_todo_error)?;

        text_result("List created", &list)
    }

    #[tool(description = "Get all todo lists")]
    pub async fn get_all_lists(&self) -> Result<CallToolResult, McpError> {
        let lists = self.backend.list_all().await.map_err(map_todo_error)?;

        text_result("Lists found", &lists)
    }

    #[tool(description = "Get a specific todo list by ID")]
    pub async fn get_list(
        &self,
        params: Parameters<GetListParams>,
    ) -> Result<CallToolResult, McpError> {
        let list = self
            .backend
            .get_list(params.0.list_id)
            .await
            .map_err(map_todo_error)?;

        text_result("List found", &list)
    }

    #[tool(description = "Rename a todo list")]
    pub async fn update_list(
        &self,
        params: Parameters<UpdateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let list = self
            .backend
            .update_list(params.0.list_id, params.0.name)
            .await
            .map_err(map_todo_error)?;

        text_result("List updated", &list)
    }

    #[tool(
        description = "Delete a todo list. Items of the list are not deleted and keep their listId."
    )]
    pub async fn delete_list(
        &self,
        params: Parameters<DeleteListParams>,
    ) -> Result<CallToolResult, McpError> {
        self.backend
            .delete_list(params.0.list_id)
            .await
            .map_err(map_todo_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "List {} deleted",
            params.0.list_id
        ))]))
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    #[tool(description = "Get all items of a specific todo list")]
    pub async fn get_list_items(
        &self,
        params: Parameters<GetListItemsParams>,
    ) -> Result<CallToolResult, McpError> {
        let items = self
            .backend
            .list_items(params.0.list_id)
            .await
            .map_err(map_todo_error)?;

        text_result(&format!("Items in list {}", params.0.list_id), &items)
    }

    #[tool(description = "Create a new item in a todo list")]
    pub async fn create_item(
        &self,
        params: Parameters<CreateItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let item = self
            .backend
            .create_item(params.0.list_id, params.0.description)
            .await
            .map_err(map_todo_error)?;

        text_result("Item created", &item)
    }

    #[tool(description = "Replace the description of an item")]
    pub async fn update_item_description(
        &self,
        params: Parameters<UpdateItemDescriptionParams>,
    ) -> Result<CallToolResult, McpError> {
        let item = self
            .backend
            .update_item_description(params.0.item_id, params.0.description)
            .await
            .map_err(map_todo_error)?;

        text_result("Item description updated", &item)
    }

    #[tool(description = "Mark an item as done, or as not done if it already is")]
    pub async fn toggle_item_done(
        &self,
        params: Parameters<ToggleItemDoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let item = self
            .backend
            .toggle_item_done(params.0.item_id)
            .await
            .map_err(map_todo_error)?;

        text_result("Item done state toggled", &item)
    }

    #[tool(description = "Delete an item")]
    pub async fn delete_item(
        &self,
        params: Parameters<DeleteItemParams>,
    ) -> Result<CallToolResult, McpError> {
        self.backend
            .delete_item(params.0.item_id)
            .await
            .map_err(map_todo_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Item {} deleted",
            params.0.item_id
        ))]))
    }
}

fn parse<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<Parameters<T>, McpError> {
    serde_json::from_value(arguments).map(Parameters).map_err(|e| {
        map_todo_error(TodoError::Validation {
            tool: tool.to_string(),
            problems: vec![e.to_string()],
        })
    })
}

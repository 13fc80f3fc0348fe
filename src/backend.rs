//! Backend abstraction used by the MCP adapter.
//!
//! The adapter is generic over `B: TodoBackend`, so the same tool table runs
//! either against the in-process [`TodoStore`] or against a remote REST API
//! through [`ApiClient`](crate::client::ApiClient).

use std::future::Future;

use crate::error::{TodoError, TodoResult};
use crate::store::{ItemId, ListId, TodoItem, TodoList, TodoStore};

/// Operations the MCP adapter can perform.
///
/// Missing records are reported as errors here (unlike the store, which
/// returns `Option`), because the adapter must surface them to the caller.
pub trait TodoBackend: Send + Sync {
    fn list_all(&self) -> impl Future<Output = TodoResult<Vec<TodoList>>> + Send;

    fn get_list(&self, id: ListId) -> impl Future<Output = TodoResult<TodoList>> + Send;

    fn create_list(&self, name: String) -> impl Future<Output = TodoResult<TodoList>> + Send;

    fn update_list(
        &self,
        id: ListId,
        name: String,
    ) -> impl Future<Output = TodoResult<TodoList>> + Send;

    fn delete_list(&self, id: ListId) -> impl Future<Output = TodoResult<()>> + Send;

    fn list_items(&self, list_id: ListId) -> impl Future<Output = TodoResult<Vec<TodoItem>>> + Send;

    /// Create an item in an existing list.
    fn create_item(
        &self,
        list_id: ListId,
        description: String,
    ) -> impl Future<Output = TodoResult<TodoItem>> + Send;

    fn update_item_description(
        &self,
        id: ItemId,
        description: String,
    ) -> impl Future<Output = TodoResult<TodoItem>> + Send;

    fn toggle_item_done(&self, id: ItemId) -> impl Future<Output = TodoResult<TodoItem>> + Send;

    /// Delete an existing item.
    fn delete_item(&self, id: ItemId) -> impl Future<Output = TodoResult<()>> + Send;
}

impl TodoBackend for TodoStore {
    async fn list_all(&self) -> TodoResult<Vec<TodoList>> {
        Ok(TodoStore::list_all(self))
    }

    async fn get_list(&self, id: ListId) -> TodoResult<TodoList> {
        TodoStore::get_list(self, id).ok_or_else(|| TodoError::list_not_found(id))
    }

    async fn create_list(&self, name: String) -> TodoResult<TodoList> {
        Ok(TodoStore::create_list(self, name))
    }

    async fn update_list(&self, id: ListId, name: String) -> TodoResult<TodoList> {
        TodoStore::update_list(self, id, name).ok_or_else(|| TodoError::list_not_found(id))
    }

    async fn delete_list(&self, id: ListId) -> TodoResult<()> {
        TodoStore::delete_list(self, id);
        Ok(())
    }

    async fn list_items(&self, list_id: ListId) -> TodoResult<Vec<TodoItem>> {
        self.items_for_list(list_id)
    }

    async fn create_item(&self, list_id: ListId, description: String) -> TodoResult<TodoItem> {
        self.create_item_in_list(list_id, description)
            .ok_or_else(|| TodoError::list_not_found(list_id))
    }

    async fn update_item_description(
        &self,
        id: ItemId,
        description: String,
    ) -> TodoResult<TodoItem> {
        TodoStore::update_item_description(self, id, description)
            .ok_or_else(|| TodoError::item_not_found(id))
    }

    async fn toggle_item_done(&self, id: ItemId) -> TodoResult<TodoItem> {
        TodoStore::toggle_item_done(self, id).ok_or_else(|| TodoError::item_not_found(id))
    }

    async fn delete_item(&self, id: ItemId) -> TodoResult<()> {
        TodoStore::delete_item(self, id)
            .map(|_| ())
            .ok_or_else(|| TodoError::item_not_found(id))
    }
}

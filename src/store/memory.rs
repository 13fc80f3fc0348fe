//! In-memory todo store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::models::{ItemId, ListId, TodoItem, TodoList};
use crate::error::{TodoError, TodoResult};

#[derive(Debug)]
struct StoreState {
    lists: Vec<TodoList>,
    items: Vec<TodoItem>,
    next_list_id: ListId,
    next_item_id: ItemId,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            items: Vec::new(),
            next_list_id: 1,
            next_item_id: 1,
        }
    }
}

impl StoreState {
    fn list_exists(&self, id: ListId) -> bool {
        self.lists.iter().any(|l| l.id == id)
    }

    fn push_item(&mut self, description: String, list_id: ListId) -> TodoItem {
        let item = TodoItem {
            id: self.next_item_id,
            description,
            done: false,
            list_id,
        };
        self.next_item_id += 1;
        self.items.push(item.clone());
        debug!(item_id = item.id, list_id, "item created");
        item
    }
}

/// Authoritative holder of every list and item.
///
/// Constructed once at start-up and shared by `Arc` with all handlers. Every
/// operation takes the single state lock, so operations never interleave.
/// Ids come from per-collection counters and are never reused.
#[derive(Debug, Default)]
pub struct TodoStore {
    state: Mutex<StoreState>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // No operation panics halfway through a mutation, so a poisoned
        // state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Lists
    // -------------------------------------------------------------------------

    /// All lists in insertion order.
    pub fn list_all(&self) -> Vec<TodoList> {
        self.lock().lists.clone()
    }

    pub fn get_list(&self, id: ListId) -> Option<TodoList> {
        self.lock().lists.iter().find(|l| l.id == id).cloned()
    }

    pub fn create_list(&self, name: impl Into<String>) -> TodoList {
        let mut state = self.lock();
        let list = TodoList {
            id: state.next_list_id,
            name: name.into(),
        };
        state.next_list_id += 1;
        state.lists.push(list.clone());
        debug!(list_id = list.id, "list created");
        list
    }

    /// Renames a list. Returns `None` without touching anything when the
    /// list does not exist.
    pub fn update_list(&self, id: ListId, name: impl Into<String>) -> Option<TodoList> {
        let mut state = self.lock();
        let list = state.lists.iter_mut().find(|l| l.id == id)?;
        list.name = name.into();
        Some(list.clone())
    }

    /// Removes a list if present and returns it. Items referencing it are
    /// left in place.
    pub fn delete_list(&self, id: ListId) -> Option<TodoList> {
        let mut state = self.lock();
        let index = state.lists.iter().position(|l| l.id == id)?;
        debug!(list_id = id, "list deleted");
        Some(state.lists.remove(index))
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Items of an existing list, in insertion order.
    pub fn items_for_list(&self, list_id: ListId) -> TodoResult<Vec<TodoItem>> {
        let state = self.lock();
        if !state.list_exists(list_id) {
            return Err(TodoError::list_not_found(list_id));
        }
        Ok(state
            .items
            .iter()
            .filter(|i| i.list_id == list_id)
            .cloned()
            .collect())
    }

    pub fn get_item(&self, id: ItemId) -> Option<TodoItem> {
        self.lock().items.iter().find(|i| i.id == id).cloned()
    }

    /// Appends a new, not-done item. The list reference is not checked here.
    pub fn create_item(&self, description: impl Into<String>, list_id: ListId) -> TodoItem {
        self.lock().push_item(description.into(), list_id)
    }

    /// Like [`create_item`](Self::create_item), but only when the list exists.
    /// The check and the insert happen under one lock.
    pub fn create_item_in_list(
        &self,
        list_id: ListId,
        description: impl Into<String>,
    ) -> Option<TodoItem> {
        let mut state = self.lock();
        if !state.list_exists(list_id) {
            return None;
        }
        Some(state.push_item(description.into(), list_id))
    }

    pub fn update_item_description(
        &self,
        id: ItemId,
        description: impl Into<String>,
    ) -> Option<TodoItem> {
        let mut state = self.lock();
        let item = state.items.iter_mut().find(|i| i.id == id)?;
        item.description = description.into();
        Some(item.clone())
    }

    pub fn toggle_item_done(&self, id: ItemId) -> Option<TodoItem> {
        let mut state = self.lock();
        let item = state.items.iter_mut().find(|i| i.id == id)?;
        item.done = !item.done;
        Some(item.clone())
    }

    /// Removes an item if present and returns it.
    pub fn delete_item(&self, id: ItemId) -> Option<TodoItem> {
        let mut state = self.lock();
        let index = state.items.iter().position(|i| i.id == id)?;
        debug!(item_id = id, "item deleted");
        Some(state.items.remove(index))
    }
}

//! Domain models for the todo store.
//!
//! These are the records the store owns. Both the REST layer and the HTTP
//! client serialize them with camelCase field names.

use serde::{Deserialize, Serialize};

/// Identifier of a [`TodoList`].
pub type ListId = u64;

/// Identifier of a [`TodoItem`].
pub type ItemId = u64;

/// A named todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
}

/// A single entry belonging to a list.
///
/// `list_id` is checked when the item is created but is not kept in sync
/// afterwards: deleting the list leaves the item pointing at a missing id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: ItemId,
    pub description: String,
    #[serde(default)]
    pub done: bool,
    pub list_id: ListId,
}

//! Application state for the API server.

use std::sync::Arc;

use crate::mcp::tools::TodoTools;
use crate::store::TodoStore;

/// Shared application state.
///
/// Holds the one store of the process and the tool table used by the
/// embedded `/tools` endpoints. Cloning only clones handles.
#[derive(Clone)]
pub struct AppState {
    store: Arc<TodoStore>,
    tools: TodoTools<TodoStore>,
}

impl AppState {
    /// Create a new AppState over the given store.
    pub fn new(store: impl Into<Arc<TodoStore>>) -> Self {
        let store = store.into();
        Self {
            tools: TodoTools::new(Arc::clone(&store)),
            store,
        }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Get a cloned Arc to the store.
    ///
    /// Useful for passing the store to services that need `Arc<TodoStore>`.
    pub fn store_arc(&self) -> Arc<TodoStore> {
        Arc::clone(&self.store)
    }

    /// Get a reference to the in-process tool table.
    pub fn tools(&self) -> &TodoTools<TodoStore> {
        &self.tools
    }
}

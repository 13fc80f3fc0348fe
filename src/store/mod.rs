//! In-memory entity store for lists and items.
//!
//! # Architecture
//!
//! - `models`: the `TodoList` and `TodoItem` records
//! - `memory`: `TodoStore`, the mutex-guarded owner of both collections

mod memory;
mod models;


pub use memory::TodoStore;
pub use models::*;

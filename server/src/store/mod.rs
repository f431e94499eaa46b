//! Persistence gateway for todos.
//!
//! # Design
//! Handlers only see the `TodoStore` trait, so the router can run against the
//! relational `SqliteStore` in production and against `MemoryStore` (or any
//! other double) in tests. Every operation touches at most one row.

mod memory;
mod sqlite;

use std::future::Future;

use thiserror::Error;

use crate::model::{NewTodo, Todo, TodoId};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Failure reported by a `TodoStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row has the given id.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// Connectivity, constraint or query failure in the database.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD access to the todos table.
pub trait TodoStore: Send + Sync + 'static {
    /// All todos in ascending id order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Todo>, StoreError>> + Send;

    /// Fails with `StoreError::NotFound` if no todo has `id`.
    fn find_by_id(&self, id: TodoId) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    /// Persist `todo` and return it with its assigned id. Callers must reject
    /// an empty `body` before calling.
    fn insert(&self, todo: NewTodo) -> impl Future<Output = Result<Todo, StoreError>> + Send;

    /// Overwrite the row with `todo.id`. Fails with `StoreError::NotFound` if
    /// the row is gone at write time.
    fn update(&self, todo: &Todo) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Remove the row with `id`. Succeeds whether or not a row matched.
    fn delete(&self, id: TodoId) -> impl Future<Output = Result<(), StoreError>> + Send;
}

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::model::{NewTodo, Todo, TodoId};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<TodoId, Todo>,
    last_id: TodoId,
}

/// In-process `TodoStore` with the same id semantics as the SQL table: ids
/// start at 1, increase monotonically and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Todo, StoreError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let todo = Todo {
            id: table.last_id,
            completed: todo.completed,
            body: todo.body,
        };
        table.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&todo.id).ok_or(StoreError::NotFound(todo.id))?;
        *row = todo.clone();
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

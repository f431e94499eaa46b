//! Todo entity and the payloads that create or change it.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a todo.
pub type TodoId = i64;

/// A persisted todo. `id` is assigned by the store on insert and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: TodoId,
    pub completed: bool,
    pub body: String,
}

/// Payload for `POST /api/todos`. A missing `body` decodes as empty so the
/// handler can reject it with a dedicated message.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for `PUT /api/todos/{id}`. Only the fields present in the JSON
/// replace the stored values; `id` is never taken from the payload.
#[derive(Clone, Debug, Deserialize)]
pub struct TodoPatch {
    pub body: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Merge the present fields onto `todo`.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(body) = self.body {
            todo.body = body;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

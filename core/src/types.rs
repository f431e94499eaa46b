//! Wire types of the `/api/todos` endpoints, as seen by a client.

use serde::{Deserialize, Serialize};

/// A todo returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub completed: bool,
    pub body: String,
}

/// Request payload for creating a todo. The server rejects an empty `body`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating a todo. Omitted fields keep their stored
/// values on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

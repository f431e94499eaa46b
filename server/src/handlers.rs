//! Request handlers for `/api/todos`.
//!
//! Each handler validates its input, makes its store calls and turns the
//! outcome into a response; any failure short-circuits into an `ApiError`.
//! Extractor rejections are taken as `Result`s so the handlers decide the
//! order of checks and the error messages themselves.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::model::{NewTodo, Todo, TodoId, TodoPatch};
use crate::store::{StoreError, TodoStore};

fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<TodoId, ApiError> {
    let Path(raw) = path.map_err(|_| ApiError::InvalidId)?;
    raw.parse().map_err(|_| ApiError::InvalidId)
}

/// `GET /api/todos`
pub async fn list_todos<S: TodoStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store
        .list_all()
        .await
        .map_err(ApiError::store("Failed to fetch todos"))?;
    tracing::debug!(count = todos.len(), "todos fetched");
    Ok(Json(todos))
}

/// `POST /api/todos`
pub async fn create_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    input: Result<Json<NewTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = input.map_err(|_| ApiError::MalformedJson)?;
    if input.body.is_empty() {
        return Err(ApiError::EmptyBody);
    }
    let todo = store
        .insert(input)
        .await
        .map_err(ApiError::store("Failed to create todo"))?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /api/todos/{id}`
///
/// The existing record is fetched before the payload is decoded, so an
/// unknown id is reported as 404 even when the payload is also malformed.
pub async fn update_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<String>, PathRejection>,
    patch: Result<Json<TodoPatch>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(path)?;
    let mut todo = store.find_by_id(id).await.map_err(|err| match err {
        StoreError::NotFound(_) => ApiError::NotFound,
        other => ApiError::store("Failed to update todo")(other),
    })?;

    let Json(patch) = patch.map_err(|_| ApiError::MalformedJson)?;
    if patch.body.as_deref() == Some("") {
        return Err(ApiError::EmptyBody);
    }
    patch.apply(&mut todo);

    store
        .update(&todo)
        .await
        .map_err(ApiError::store("Failed to update todo"))?;
    Ok(Json(todo))
}

/// `DELETE /api/todos/{id}`
///
/// Deleting an id that does not exist still answers 204.
pub async fn delete_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(path)?;
    store
        .delete(id)
        .await
        .map_err(ApiError::store("Failed to delete todo"))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Any path outside the four routes.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// A known path with a method it does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

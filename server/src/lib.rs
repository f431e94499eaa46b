//! JSON CRUD service for todos.
//!
//! # Overview
//! Four routes under `/api/todos` backed by a `TodoStore`. The store is
//! injected through `app`, so the same router runs against SQLite in
//! production and against in-process doubles in tests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use model::{NewTodo, Todo, TodoId, TodoPatch};
pub use store::{MemoryStore, SqliteStore, StoreError, TodoStore};

use handlers::{
    create_todo, delete_todo, list_todos, method_not_allowed, route_not_found, update_todo,
};

pub fn app<S: TodoStore>(store: Arc<S>) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/api/todos/{id}", put(update_todo::<S>).delete(delete_todo::<S>))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(logging::log_requests))
        .with_state(store)
}

/// Serve `app(store)` on `listener` until Ctrl-C or SIGTERM, then let
/// in-flight requests finish.
pub async fn run<S: TodoStore>(listener: TcpListener, store: Arc<S>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received, draining connections");
}

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::{StoreError, TodoStore};
use crate::model::{NewTodo, Todo, TodoId};

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    body      TEXT    NOT NULL
)";

/// `TodoStore` backed by a SQLite database through a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a pool for `url`, creating the database file if it does not exist.
    ///
    /// An in-memory database lives only as long as its connection, so for
    /// `:memory:` URLs the pool holds exactly one connection that never expires.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = pool_options.connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Create the `todos` table if it is missing.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

impl TodoStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, completed, body FROM todos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Todo, StoreError> {
        sqlx::query_as::<_, Todo>("SELECT id, completed, body FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (completed, body) VALUES (?, ?) RETURNING id, completed, body",
        )
        .bind(todo.completed)
        .bind(todo.body)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE todos SET completed = ?, body = ? WHERE id = ?")
            .bind(todo.completed)
            .bind(&todo.body)
            .bind(todo.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(todo.id));
        }
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

//! Durable storage for todo records.
//!
//! # Design
//! `TodoStore` wraps a `SqlitePool` and is cheap to clone, so every request
//! checks out its own connection and hands it back when the future
//! completes or unwinds. Writes run in a transaction each; a transaction
//! that is dropped without `commit` rolls back.
//!
//! Missing rows are reported as `None` / `false`, never as an error.
//!
//! `update` is read-merge-write inside one `BEGIN IMMEDIATE` transaction,
//! so the write lock is held from the read onwards and competing writers
//! wait out the busy timeout instead of failing. Nothing coordinates two
//! updates to the same id beyond that: the last one to commit wins.

use sqlx::SqlitePool;
use tracing::debug;

use crate::model::{NewTodo, Todo, TodoPatch};

const SELECT_TODO: &str = "SELECT id, title, description, completed, urgency FROM todo";

#[derive(Clone, Debug)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All records in id order.
    pub async fn list(&self) -> Result<Vec<Todo>, sqlx::Error> {
        debug!("Fetching all todos");
        sqlx::query_as::<_, Todo>(&format!("{SELECT_TODO} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
    }

    /// Insert `input` under a freshly assigned id and return the stored row.
    pub async fn create(&self, input: NewTodo) -> Result<Todo, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            "INSERT INTO todo (title, description, completed, urgency) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.completed)
        .bind(input.urgency)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let todo = sqlx::query_as::<_, Todo>(&format!("{SELECT_TODO} WHERE id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!("Created todo {}", id);
        Ok(todo)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Todo>, sqlx::Error> {
        debug!("Fetching todo {}", id);
        sqlx::query_as::<_, Todo>(&format!("{SELECT_TODO} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Merge the present fields of `patch` onto the stored record.
    ///
    /// Returns `None` without writing when no record has this id. An empty
    /// patch returns the current record without writing.
    pub async fn update(&self, id: i64, patch: TodoPatch) -> Result<Option<Todo>, sqlx::Error> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let Some(mut todo) = sqlx::query_as::<_, Todo>(&format!("{SELECT_TODO} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            debug!("Todo {} not found for update", id);
            return Ok(None);
        };

        if patch.is_empty() {
            debug!("Empty update for todo {}, nothing to write", id);
            return Ok(Some(todo));
        }

        patch.apply(&mut todo);

        sqlx::query(
            "UPDATE todo SET title = ?, description = ?, completed = ?, urgency = ? WHERE id = ?",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.urgency)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!("Updated todo {}", id);
        Ok(Some(todo))
    }

    /// Remove the record. Returns `false` when there was nothing to remove.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let affected = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if affected == 0 {
            debug!("Todo {} not found for delete", id);
            return Ok(false);
        }

        tx.commit().await?;
        debug!("Deleted todo {}", id);
        Ok(true)
    }
}

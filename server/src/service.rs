//! Request-level operations on todos.
//!
//! Thin wrappers over [`TodoStore`]: the store reports absence as `None` or
//! `false`, and this layer turns that into [`TodoError::NotFound`] with the
//! message the client shows to the user.

use tracing::info;

use crate::error::TodoError;
use crate::model::{NewTodo, Todo, TodoPatch};
use crate::store::TodoStore;

#[derive(Clone, Debug)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.store.list().await?;
        info!("Listed {} todos", todos.len());
        Ok(todos)
    }

    pub async fn create(&self, input: NewTodo) -> Result<Todo, TodoError> {
        let todo = self.store.create(input).await?;
        info!("Created todo {} '{}'", todo.id, todo.title);
        Ok(todo)
    }

    pub async fn get(&self, id: i64) -> Result<Todo, TodoError> {
        info!("Getting todo: {}", id);
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(TodoError::not_found)
    }

    pub async fn update(&self, id: i64, patch: TodoPatch) -> Result<Todo, TodoError> {
        info!("Updating todo: {}", id);
        self.store
            .update(id, patch)
            .await?
            .ok_or_else(|| TodoError::not_found_with_id(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), TodoError> {
        info!("Deleting todo: {}", id);
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(TodoError::not_found_with_id(id))
        }
    }
}

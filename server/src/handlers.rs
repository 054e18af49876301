//! HTTP handlers for the /todos resource.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::TodoError;
use crate::model::{NewTodo, Todo, TodoPatch};
use crate::service::TodoService;

pub async fn list_todos(State(service): State<TodoService>) -> Result<Json<Vec<Todo>>, TodoError> {
    service.list().await.map(Json)
}

pub async fn create_todo(
    State(service): State<TodoService>,
    Json(input): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let todo = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, TodoError> {
    service.get(id).await.map(Json)
}

pub async fn update_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, TodoError> {
    service.update(id, patch).await.map(Json)
}

pub async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, TodoError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

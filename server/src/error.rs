use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the todo service.
#[derive(Debug, Error)]
pub enum TodoError {
    /// No record has the requested id. Carries the user-facing message.
    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl TodoError {
    pub fn not_found() -> Self {
        TodoError::NotFound("Задача не найдена".to_string())
    }

    pub fn not_found_with_id(id: i64) -> Self {
        TodoError::NotFound(format!("Задача c id {id} не найдена"))
    }
}

/// Error body shape: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            TodoError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            TodoError::Storage(e) => {
                error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

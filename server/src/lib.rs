//! HTTP service for managing todo items, backed by SQLite.
//!
//! # Overview
//! - [`store::TodoStore`] owns the `todo` table: list, create, get, update,
//!   delete, one short transaction per call.
//! - [`service::TodoService`] turns store results into responses and
//!   absence into [`error::TodoError::NotFound`].
//! - [`handlers`] binds the service to the `/todos` routes below.
//!
//! | Method | Path          | Success               |
//! |--------|---------------|-----------------------|
//! | GET    | `/todos`      | 200, array of todos   |
//! | POST   | `/todos`      | 201, created todo     |
//! | GET    | `/todos/{id}` | 200, todo             |
//! | PUT    | `/todos/{id}` | 200, updated todo     |
//! | DELETE | `/todos/{id}` | 204, empty            |
//!
//! `/todos/` is accepted as an alias of `/todos`. The static front-end is
//! mounted next to the API by [`app`].

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod model;
pub mod service;
pub mod store;

use std::future::Future;
use std::path::Path;

use axum::{routing::get, Router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use error::TodoError;
pub use model::{Field, NewTodo, Todo, TodoPatch};
pub use service::TodoService;
pub use store::TodoStore;

/// Routes for the todo resource only.
pub fn todo_router(service: TodoService) -> Router {
    use handlers::*;

    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(service)
}

/// Full application: API routes, the front-end entry page at `/`, and the
/// asset directory at `/static`.
pub fn app(pool: SqlitePool, static_dir: &Path) -> Router {
    let service = TodoService::new(TodoStore::new(pool));

    todo_router(service)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// Like [`run`], but stops accepting connections once `shutdown` resolves
/// and waits for in-flight requests to finish.
pub async fn run_until<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

//! DTOs for the todo HTTP API.
//!
//! # Design
//! Defined independently from the server crate so the client never links
//! Axum or SQLx. The integration test runs against the real server and
//! catches schema drift.

use serde::{Deserialize, Serialize};

/// Urgency the server assigns when a create request leaves it out.
pub const DEFAULT_URGENCY: i64 = 3;

/// A todo as returned by the server. `id` is always assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub urgency: i64,
}

/// Request payload for creating a todo. The server picks the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_urgency")]
    pub urgency: i64,
}

fn default_urgency() -> i64 {
    DEFAULT_URGENCY
}

impl CreateTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
            urgency: DEFAULT_URGENCY,
        }
    }
}

/// Request payload for a partial update. `None` fields are left out of the
/// JSON and stay unchanged on the server.
///
/// `description` has one more level: `Some(None)` sends an explicit `null`
/// and clears the stored description.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<i64>,
}

impl UpdateTodo {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

//! Todo record and the request payloads that create or modify it.
//!
//! # Design
//! Creation and update use separate payload types. `NewTodo` fills in
//! defaults for everything but `title`; `TodoPatch` wraps every field in
//! [`Field`] so an update can tell "key missing" apart from "key set to
//! `false` / `0` / `null`". Unknown keys, including a client-supplied `id`,
//! are ignored by both.

use serde::{Deserialize, Deserializer, Serialize};

/// Urgency assigned when a create payload omits it.
/// 1 = urgent, 2 = important, 3 = not urgent. Not enforced.
pub const DEFAULT_URGENCY: i64 = 3;

/// A persisted todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub urgency: i64,
}

/// Create payload. `id` is never read from the request.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_urgency")]
    pub urgency: i64,
}

fn default_urgency() -> i64 {
    DEFAULT_URGENCY
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
            urgency: DEFAULT_URGENCY,
        }
    }
}

/// A JSON object member that is either missing or carries a value.
///
/// Paired with `#[serde(default)]`: a missing key yields `Absent`, any
/// present key is deserialized as `T` and yields `Present`. For
/// `Field<Option<T>>` an explicit `null` is `Present(None)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// Overwrite `slot` if a value was supplied.
    pub fn assign_to(self, slot: &mut T) {
        if let Field::Present(value) = self {
            *slot = value;
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Field::Present)
    }
}

/// Partial update payload. Only present fields overwrite the stored record.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub description: Field<Option<String>>,
    #[serde(default)]
    pub completed: Field<bool>,
    #[serde(default)]
    pub urgency: Field<i64>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_absent()
            && self.description.is_absent()
            && self.completed.is_absent()
            && self.urgency.is_absent()
    }

    /// Merge the supplied fields onto `todo`. The id is never touched.
    pub fn apply(self, todo: &mut Todo) {
        self.title.assign_to(&mut todo.title);
        self.description.assign_to(&mut todo.description);
        self.completed.assign_to(&mut todo.completed);
        self.urgency.assign_to(&mut todo.urgency);
    }
}

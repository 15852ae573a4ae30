//! Domain types for the todo list.
//!
//! A todo list is an insertion-ordered sequence of items that can be added,
//! toggled between complete and incomplete, edited, and deleted. The "items
//! left" view is derived from the list on every observation rather than
//! tracked incrementally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo item
///
/// Ids are opaque and unique for the lifetime of a store. Production ids come
/// from the environment's `IdSource` (random v4 UUIDs), never from the wall
/// clock, so two items added within the same millisecond still get distinct
/// ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Display text, non-empty after any successful add or edit
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
    /// When the todo was completed (if completed)
    pub completed_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates a new, incomplete todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Flips the completion flag
    ///
    /// `completed_at` is set when the item becomes complete and cleared when
    /// it becomes incomplete again.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(now) } else { None };
    }
}

/// State of the todo list
///
/// Items are kept in insertion order: new items go to the end, and nothing
/// but removal changes the relative order of the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos, insertion-ordered
    pub todos: Vec<TodoItem>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the list has no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of incomplete todos
    ///
    /// Recomputed from the list on every call; never stored.
    #[must_use]
    pub fn items_left(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| &t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.todos.iter().any(|t| &t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &TodoId) -> Option<&mut TodoItem> {
        self.todos.iter_mut().find(|t| &t.id == id)
    }

    pub(crate) fn index_of(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|t| &t.id == id)
    }
}

/// Commands accepted by the todo reducer
///
/// These are the only state-mutating inputs. Every command is total: unknown
/// ids and blank text degrade to no-ops rather than signaling failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new incomplete todo with the trimmed text
    Add {
        /// Raw display text; trimmed by the reducer, blank is rejected
        text: String,
    },

    /// Flip the completion flag of the matching todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Remove the matching todo
    Delete {
        /// Todo to delete
        id: TodoId,
    },

    /// Replace the matching todo's text
    Edit {
        /// Todo to edit
        id: TodoId,
        /// Raw replacement text; trimmed by the reducer, blank is rejected
        text: String,
    },
}

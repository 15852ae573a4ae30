//! Reducer logic for the todo list.
//!
//! The reducer is a pure four-case state machine: every command applies
//! synchronously, returns no effects, and never fails. Validation lives here
//! rather than at the call sites, so the core stays correct regardless of
//! caller discipline: blank text and unknown ids reduce to no-ops.

use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use todostore_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdSource},
    reducer::Reducer,
};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for creation and completion timestamps
    pub clock: std::sync::Arc<dyn Clock>,
    /// Source of fresh item ids
    pub ids: std::sync::Arc<dyn IdSource>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: std::sync::Arc<dyn Clock>, ids: std::sync::Arc<dyn IdSource>) -> Self {
        Self { clock, ids }
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => {
                let text = text.trim();
                if !text.is_empty() {
                    let id = TodoId::from_uuid(env.ids.fresh_id());
                    state
                        .todos
                        .push(TodoItem::new(id, text.to_string(), env.clock.now()));
                }
            },

            TodoAction::Toggle { id } => {
                let now = env.clock.now();
                if let Some(item) = state.get_mut(&id) {
                    item.toggle(now);
                }
            },

            TodoAction::Delete { id } => {
                // Ids are unique, so this removes at most one item and leaves
                // the relative order of the rest unchanged.
                if let Some(index) = state.index_of(&id) {
                    state.todos.remove(index);
                }
            },

            TodoAction::Edit { id, text } => {
                let text = text.trim();
                if !text.is_empty() {
                    if let Some(item) = state.get_mut(&id) {
                        item.text = text.to_string();
                    }
                }
            },
        }

        // Pure state machine - no side effects
        SmallVec::new()
    }
}

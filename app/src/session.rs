//! Transient edit-session state.
//!
//! At most one item is being edited at a time. The session is UI workflow
//! state, not domain state: it lives next to the store, never inside the
//! reducer's state shape, and holds an unsaved draft until the user commits
//! or cancels.

use crate::types::{TodoAction, TodoId, TodoItem};

/// The single item currently being edited, plus its unsaved draft text
///
/// The holder keeps this in an `Option`: `begin` opens a session, a
/// successful [`commit`](EditSession::commit) or an explicit cancel clears
/// it (cancelling is just dropping the session without issuing a command).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    id: TodoId,
    draft: String,
}

impl EditSession {
    /// Opens an edit session on the given item, seeding the draft with its
    /// current text
    #[must_use]
    pub fn begin(item: &TodoItem) -> Self {
        Self {
            id: item.id.clone(),
            draft: item.text.clone(),
        }
    }

    /// The id of the item being edited
    #[must_use]
    pub const fn id(&self) -> &TodoId {
        &self.id
    }

    /// The current draft text
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft text
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Produces the command to apply this edit, if the draft is committable
    ///
    /// Returns `None` when the trimmed draft is blank: no command is issued
    /// and the session stays open, matching the original UI's behavior. The
    /// holder clears the session only on `Some`.
    ///
    /// If the item was deleted while the session was open, the returned
    /// command reduces to a no-op at the store.
    #[must_use]
    pub fn commit(&self) -> Option<TodoAction> {
        if self.draft.trim().is_empty() {
            return None;
        }

        Some(TodoAction::Edit {
            id: self.id.clone(),
            text: self.draft.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{TodoEnvironment, TodoReducer};
    use crate::types::TodoState;
    use chrono::Utc;
    use std::sync::Arc;
    use todostore_core::reducer::Reducer;
    use todostore_testing::{SequentialIds, test_clock};

    fn item(text: &str) -> TodoItem {
        TodoItem::new(TodoId::new(), text.to_string(), Utc::now())
    }

    #[test]
    fn begin_captures_id_and_text() {
        let todo = item("buy milk");
        let session = EditSession::begin(&todo);

        assert_eq!(session.id(), &todo.id);
        assert_eq!(session.draft(), "buy milk");
    }

    #[test]
    fn commit_with_new_draft_issues_edit() {
        let todo = item("buy milk");
        let mut session = EditSession::begin(&todo);
        session.set_draft("buy oat milk");

        assert_eq!(
            session.commit(),
            Some(TodoAction::Edit {
                id: todo.id,
                text: "buy oat milk".to_string(),
            })
        );
    }

    #[test]
    fn commit_with_blank_draft_stalls() {
        let todo = item("buy milk");
        let mut session = EditSession::begin(&todo);
        session.set_draft("   ");

        // No command, and the session is still usable
        assert_eq!(session.commit(), None);
        assert_eq!(session.id(), &todo.id);

        session.set_draft("buy bread");
        assert!(session.commit().is_some());
    }

    #[test]
    fn commit_after_delete_reduces_to_no_op() {
        let env = TodoEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIds::new()));
        let reducer = TodoReducer::new();
        let mut state = TodoState::new();

        reducer.reduce(
            &mut state,
            TodoAction::Add {
                text: "buy milk".to_string(),
            },
            &env,
        );
        let todo = state.todos[0].clone();

        let mut session = EditSession::begin(&todo);
        session.set_draft("buy oat milk");

        // Item disappears mid-edit
        reducer.reduce(&mut state, TodoAction::Delete { id: todo.id }, &env);
        let before = state.clone();

        let action = session.commit().unwrap();
        reducer.reduce(&mut state, action, &env);

        assert_eq!(state, before);
        assert!(state.is_empty());
    }
}

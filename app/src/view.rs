//! Textual rendering of a todo list snapshot.
//!
//! Presentation only: nothing here mutates state. The renderer takes a state
//! snapshot plus the optional edit session and produces one line per item -
//! a completion indicator, the display text (struck through when completed),
//! and the in-edit item shown with its unsaved draft - followed by a footer
//! with the count of incomplete items when the list is non-empty.

use crate::session::EditSession;
use crate::types::TodoState;

/// Renders the list as plain text
#[must_use]
pub fn render(state: &TodoState, session: Option<&EditSession>) -> String {
    let mut out = String::new();

    for item in &state.todos {
        let line = match session {
            Some(session) if session.id() == &item.id => {
                format!("[e] {} (editing)\n", session.draft())
            },
            _ if item.completed => format!("[x] ~~{}~~\n", item.text),
            _ => format!("[ ] {}\n", item.text),
        };
        out.push_str(&line);
    }

    if !state.is_empty() {
        out.push_str(&format!("\n{} items left\n", state.items_left()));
    }

    out
}

//! In-memory todo list built on the todostore reducer architecture.
//!
//! The core is a pure four-case state machine over an insertion-ordered list
//! of todo items:
//!
//! - `Add` appends a new incomplete item (blank text rejected)
//! - `Toggle` flips completion in place
//! - `Delete` removes the matching item
//! - `Edit` replaces the matching item's text (blank text rejected)
//!
//! Unknown ids degrade to no-ops; no command can fail. The "items left"
//! count is derived from the list on every observation. Edit-in-progress
//! state lives in [`EditSession`], outside the reducer entirely.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todostore::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use todostore_core::environment::{SystemClock, UuidIds};
//! use todostore_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(Arc::new(SystemClock), Arc::new(UuidIds));
//! let store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//! store.send(TodoAction::Add { text: "Buy milk".to_string() }).await?;
//!
//! let remaining = store.state(TodoState::items_left).await;
//! println!("{remaining} items left");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod session;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use session::EditSession;
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
pub use view::render;

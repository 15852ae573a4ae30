//! Demo binary for the todo store.
//!
//! Walks through the full command surface: adding items (including a
//! rejected blank submission), toggling completion, an edit session with a
//! commit, and a deletion, printing the rendered list after each step.

use std::sync::Arc;
use std::time::Duration;

use todostore::{EditSession, TodoAction, TodoEnvironment, TodoReducer, TodoState, render};
use todostore_core::environment::{SystemClock, UuidIds};
use todostore_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todostore=debug,todostore_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Store ===\n");

    let env = TodoEnvironment::new(Arc::new(SystemClock), Arc::new(UuidIds));
    let store = Store::new(TodoState::new(), TodoReducer::new(), env);

    // Add some todos; the blank one is silently rejected by the reducer
    println!("Adding todos...");
    for text in ["Buy milk", "Pay bills", "Walk the dog", "   "] {
        store
            .send(TodoAction::Add {
                text: text.to_string(),
            })
            .await?;
    }

    let snapshot = store.state(Clone::clone).await;
    tracing::info!(count = snapshot.len(), "blank submission was rejected");
    println!("\n{}", render(&snapshot, None));

    // Complete the first todo
    let first = store
        .state(|s| s.todos.first().map(|t| t.id.clone()))
        .await
        .ok_or("list should not be empty")?;
    println!("Completing 'Buy milk'...");
    store.send(TodoAction::Toggle { id: first }).await?;

    let snapshot = store.state(Clone::clone).await;
    println!("\n{}", render(&snapshot, None));

    // Edit the second todo through an edit session
    let second = snapshot
        .todos
        .get(1)
        .ok_or("second todo should exist")?
        .clone();
    println!("Editing 'Pay bills'...");
    let mut session = EditSession::begin(&second);
    session.set_draft("Pay the electricity bill");
    println!("\n{}", render(&snapshot, Some(&session)));

    if let Some(action) = session.commit() {
        store.send(action).await?;
    }

    // Begin another edit, then cancel it by dropping the session
    let third = store
        .state(|s| s.todos.get(2).cloned())
        .await
        .ok_or("third todo should exist")?;
    let mut cancelled = EditSession::begin(&third);
    cancelled.set_draft("never applied");
    drop(cancelled);

    // Delete the third todo
    println!("Deleting 'Walk the dog'...");
    store.send(TodoAction::Delete { id: third.id }).await?;

    let snapshot = store.state(Clone::clone).await;
    println!("\n{}", render(&snapshot, None));

    store.shutdown(Duration::from_secs(5)).await?;
    println!("=== Demo Complete ===");
    Ok(())
}

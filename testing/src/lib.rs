//! # Todostore Testing
//!
//! Testing utilities and helpers for the todostore architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - Assertion helpers for reducers
//!
//! ## Example
//!
//! ```ignore
//! use todostore_testing::{ReducerTest, mocks};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add { text: "buy milk".into() })
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use todostore_core::environment::{Clock, IdSource};

pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdSource, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todostore_testing::mocks::FixedClock;
    /// use todostore_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Sequential id source for predictable ids in tests
    ///
    /// Hands out `Uuid`s built from an incrementing counter, so the first id
    /// is `00000000-...-0001`, the second `...-0002`, and so on.
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Create a new sequential id source starting at 1
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// The `Uuid` that the nth call (1-based) to `fresh_id` returns
        #[must_use]
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u128(n as u128)
        }
    }

    impl IdSource for SequentialIds {
        fn fresh_id(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIds, test_clock};
pub use reducer_test::{ReducerTest, assertions};

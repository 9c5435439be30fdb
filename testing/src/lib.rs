//! # Tasklist Testing
//!
//! Testing utilities and helpers for the task list state container.
//!
//! This crate provides:
//! - Deterministic implementations of the environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//! - proptest strategies for user input
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{test_clock, SequentialIdGenerator, ReducerTest};
//!
//! ReducerTest::new(TaskReducer::new())
//!     .with_env(TaskEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new())))
//!     .given_state(TaskList::new())
//!     .when_action(TaskAction::AddTask { title: "Buy milk".into() })
//!     .then_state(|list| assert_eq!(list.len(), 1))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use tasklist_core::environment::{Clock, IdGenerator};

/// Given-When-Then harness for reducers
pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::FixedClock;
    /// use tasklist_core::environment::Clock;
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

    /// Predictable ids: `00000000-0000-0000-0000-000000000001`, `…02`, …
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::SequentialIdGenerator;
    /// use tasklist_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is 1
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }

        /// Number of ids handed out so far
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.issued.load(Ordering::SeqCst)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Titles a user might type: mostly real text, sometimes blank or
    /// padded with whitespace.
    pub fn any_title() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => non_blank_title(),
            1 => blank_title(),
            1 => (blank_title(), non_blank_title(), blank_title())
                .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}")),
        ]
    }

    /// Titles with at least one non-whitespace character and no surrounding
    /// whitespace.
    pub fn non_blank_title() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 ,.!?-]{0,30}[A-Za-z0-9]|[A-Za-z0-9]"
    }

    /// Titles that are empty once trimmed.
    pub fn blank_title() -> impl Strategy<Value = String> {
        "[ \t\n]{0,4}"
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock, SequentialIdGenerator};
pub use reducer_test::{assertions, ReducerTest};

//! # Tasklist Core
//!
//! Core traits and types for the task list state container.
//!
//! This crate provides the fundamental abstractions the rest of the workspace
//! is built on: a pure reducer, effect descriptions that a runtime executes,
//! and the environment traits that keep reducers deterministic.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (task list, UI flags)
//! - **Action**: All possible inputs to a reducer (commands and events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits (`Clock`, `IdGenerator`)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct FlagState {
//!     on: bool,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum FlagAction {
//!     Flip,
//! }
//!
//! struct FlagReducer;
//!
//! impl Reducer for FlagReducer {
//!     type State = FlagState;
//!     type Action = FlagAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut FlagState,
//!         action: FlagAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<FlagAction>; 4]> {
//!         match action {
//!             FlagAction::Flip => state.on = !state.on,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = FlagState::default();
//! let _ = FlagReducer.reduce(&mut state, FlagAction::Flip, &());
//! assert!(state.on);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};
pub use uuid::Uuid;

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// Effects returned by a single reducer call.
    ///
    /// Most reducers return zero or one effect, so four inline slots avoid
    /// a heap allocation on the hot path.
    pub type Effects<Action> = SmallVec<[Effect<Action>; 4]>;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TaskReducer {
    ///     type State = TaskList;
    ///     type Action = TaskAction;
    ///     type Environment = TaskEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TaskList,
    ///         action: TaskAction,
    ///         env: &TaskEnvironment,
    ///     ) -> SmallVec<[Effect<TaskAction>; 4]> {
    ///         match action {
    ///             TaskAction::AddTask { title } => {
    ///                 // Business logic here
    ///                 SmallVec::new()
    ///             }
    ///             _ => SmallVec::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }

    /// Run a reducer as a value-to-value transition.
    ///
    /// The input state is left untouched; the reducer runs against a clone
    /// which is returned together with the produced effects. This is the
    /// `(state, action) -> new state` form of [`Reducer::reduce`].
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_core::{effect::Effect, reducer::{transition, Reducer}, SmallVec};
    ///
    /// struct Add;
    ///
    /// impl Reducer for Add {
    ///     type State = i32;
    ///     type Action = i32;
    ///     type Environment = ();
    ///
    ///     fn reduce(&self, state: &mut i32, action: i32, _env: &()) -> SmallVec<[Effect<i32>; 4]> {
    ///         *state += action;
    ///         SmallVec::new()
    ///     }
    /// }
    ///
    /// let before = 1;
    /// let (after, effects) = transition(&Add, &before, 2, &());
    /// assert_eq!(before, 1);
    /// assert_eq!(after, 3);
    /// assert!(effects.is_empty());
    /// ```
    pub fn transition<R>(
        reducer: &R,
        state: &R::State,
        action: R::Action,
        env: &R::Environment,
    ) -> (R::State, Effects<R::Action>)
    where
        R: Reducer,
        R::State: Clone,
    {
        let mut next = state.clone();
        let effects = reducer.reduce(&mut next, action, env);
        (next, effects)
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution).
pub mod effect {
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed `action` back into the store once `duration` has elapsed
        ///
        /// Pending delays are dropped when the store shuts down.
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },
    }

    impl<Action> Effect<Action> {
        /// Dispatch `action` after `duration` has elapsed
        #[must_use]
        pub fn delay(duration: Duration, action: Action) -> Effect<Action> {
            Effect::Delay {
                duration,
                action: Box::new(action),
            }
        }

        /// Returns true if this effect does nothing when executed
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }

        /// Lift the action this effect produces into a parent action type
        ///
        /// Used when a child reducer is embedded into a larger one: the
        /// child's effects must feed back into the parent's action enum.
        #[must_use]
        pub fn map<B>(self, f: fn(Action) -> B) -> Effect<B> {
            match self {
                Effect::None => Effect::None,
                Effect::Delay { duration, action } => Effect::Delay {
                    duration,
                    action: Box::new(f(*action)),
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - uses system clock
    /// struct SystemClock;
    /// impl Clock for SystemClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         Utc::now()
    ///     }
    /// }
    ///
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall-clock time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Id generator trait - abstracts identifier creation for testability
    ///
    /// Every call must return an identifier never returned before by the
    /// same generator.
    pub trait IdGenerator: Send + Sync {
        /// Produce a fresh identifier
        fn next_id(&self) -> Uuid;
    }

    /// Random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}

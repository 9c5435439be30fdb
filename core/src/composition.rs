//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Embed a child reducer into a parent state, action
//!   and environment
//!
//! A feature reducer is written against its own small state and action types.
//! Scoping lifts it into the root types; combining runs all scoped children
//! for every root action.
//!
//! # Example
//!
//! ```
//! use tasklist_core::composition::{combine_reducers, scope_reducer};
//! use tasklist_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Default)]
//! struct Counter {
//!     count: i32,
//! }
//!
//! #[derive(Clone)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Counter, action: CounterAction, _env: &()) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         SmallVec::new()
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! struct Root {
//!     left: Counter,
//!     right: Counter,
//! }
//!
//! #[derive(Clone)]
//! enum RootAction {
//!     Left(CounterAction),
//!     Right(CounterAction),
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(
//!         CounterReducer,
//!         |root: &mut Root| &mut root.left,
//!         |action| match action {
//!             RootAction::Left(a) => Some(a),
//!             RootAction::Right(_) => None,
//!         },
//!         RootAction::Left,
//!         |env: &()| env,
//!     )),
//!     Box::new(scope_reducer(
//!         CounterReducer,
//!         |root: &mut Root| &mut root.right,
//!         |action| match action {
//!             RootAction::Right(a) => Some(a),
//!             RootAction::Left(_) => None,
//!         },
//!         RootAction::Right,
//!         |env: &()| env,
//!     )),
//! ]);
//!
//! let mut state = Root::default();
//! let _ = root.reduce(&mut state, RootAction::Right(CounterAction::Increment), &());
//! assert_eq!(state.left.count, 0);
//! assert_eq!(state.right.count, 1);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Boxed reducer accepted by [`combine_reducers`]
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and concatenated.
/// This is useful when you want to split reducer logic across multiple implementations.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of child reducers
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if no child reducers were combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a child reducer into a parent state, action and environment.
///
/// # Arguments
///
/// - `reducer`: The child reducer
/// - `state`: Borrows the child state out of the parent state
/// - `extract`: Picks the child action out of a parent action (`None` = not ours)
/// - `embed`: Wraps child actions produced by effects back into the parent type
/// - `environment`: Borrows the child environment out of the parent environment
///
/// Parent actions the child does not handle produce no effects and leave
/// the state untouched.
pub fn scope_reducer<S, A, E, R>(
    reducer: R,
    state: fn(&mut S) -> &mut R::State,
    extract: fn(A) -> Option<R::Action>,
    embed: fn(R::Action) -> A,
    environment: fn(&E) -> &R::Environment,
) -> ScopedReducer<S, A, E, R>
where
    R: Reducer,
{
    ScopedReducer {
        reducer,
        state,
        extract,
        embed,
        environment,
    }
}

/// A reducer embedded into a parent state/action/environment.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, A, E, R>
where
    R: Reducer,
{
    reducer: R,
    state: fn(&mut S) -> &mut R::State,
    extract: fn(A) -> Option<R::Action>,
    embed: fn(R::Action) -> A,
    environment: fn(&E) -> &R::Environment,
}

impl<S, A, E, R> Clone for ScopedReducer<S, A, E, R>
where
    R: Reducer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            state: self.state,
            extract: self.extract,
            embed: self.embed,
            environment: self.environment,
        }
    }
}

impl<S, A, E, R> Reducer for ScopedReducer<S, A, E, R>
where
    R: Reducer,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.extract)(action) else {
            return SmallVec::new();
        };

        self.reducer
            .reduce((self.state)(state), child_action, (self.environment)(env))
            .into_iter()
            .map(|effect| effect.map(self.embed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{smallvec, SmallVec};
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct TestState {
        counter: i32,
        name: String,
    }

    #[derive(Clone)]
    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.counter += 1;
                    smallvec![Effect::None]
                },
                TestAction::Decrement => {
                    state.counter -= 1;
                    smallvec![Effect::None]
                },
                TestAction::SetName(_) => smallvec![Effect::None],
            }
        }
    }

    struct NameReducer;

    impl Reducer for NameReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            if let TestAction::SetName(name) = action {
                state.name = name;
            }
            smallvec![Effect::None]
        }
    }

    #[test]
    fn test_combine_reducers() {
        let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(NameReducer)]);
        assert_eq!(combined.len(), 2);

        let mut state = TestState::default();

        let _ = combined.reduce(&mut state, TestAction::Increment, &());
        assert_eq!(state.counter, 1);

        let _ = combined.reduce(&mut state, TestAction::SetName("Alice".to_string()), &());
        assert_eq!(state.name, "Alice");

        // Both reducers contribute one effect each
        let effects = combined.reduce(&mut state, TestAction::Decrement, &());
        assert_eq!(effects.len(), 2);
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
    }

    // Scoped reducer tests
    #[derive(Clone, Default)]
    struct SubState {
        value: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum SubAction {
        Add(i32),
        Reset,
    }

    struct SubEnv {
        reset_after: Duration,
    }

    #[derive(Clone)]
    struct SubReducer;

    impl Reducer for SubReducer {
        type State = SubState;
        type Action = SubAction;
        type Environment = SubEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                SubAction::Add(n) => {
                    state.value += n;
                    smallvec![Effect::delay(env.reset_after, SubAction::Reset)]
                },
                SubAction::Reset => {
                    state.value = 0;
                    SmallVec::new()
                },
            }
        }
    }

    #[derive(Clone, Default)]
    struct ParentState {
        sub: SubState,
        other: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum ParentAction {
        Sub(SubAction),
        Other,
    }

    struct ParentEnv {
        sub: SubEnv,
    }

    fn scoped() -> ScopedReducer<ParentState, ParentAction, ParentEnv, SubReducer> {
        scope_reducer(
            SubReducer,
            |parent: &mut ParentState| &mut parent.sub,
            |action| match action {
                ParentAction::Sub(sub) => Some(sub),
                ParentAction::Other => None,
            },
            ParentAction::Sub,
            |env: &ParentEnv| &env.sub,
        )
    }

    #[test]
    fn test_scope_reducer() {
        let scoped = scoped();
        let env = ParentEnv {
            sub: SubEnv {
                reset_after: Duration::from_millis(10),
            },
        };

        let mut state = ParentState {
            sub: SubState { value: 5 },
            other: "test".to_string(),
        };

        let effects = scoped.reduce(&mut state, ParentAction::Sub(SubAction::Add(3)), &env);
        assert_eq!(state.sub.value, 8);
        assert_eq!(state.other, "test");

        // Child effects are lifted into the parent action type
        match effects.as_slice() {
            [Effect::Delay { duration, action }] => {
                assert_eq!(*duration, Duration::from_millis(10));
                assert_eq!(**action, ParentAction::Sub(SubAction::Reset));
            },
            other => unreachable!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_scope_reducer_ignores_foreign_actions() {
        let scoped = scoped();
        let env = ParentEnv {
            sub: SubEnv {
                reset_after: Duration::ZERO,
            },
        };
        let mut state = ParentState::default();

        let effects = scoped.reduce(&mut state, ParentAction::Other, &env);

        assert!(effects.is_empty());
        assert_eq!(state.sub.value, 0);
    }
}

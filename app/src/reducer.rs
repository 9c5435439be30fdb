//! Reducer logic for the task list.
//!
//! Commands are validated against the current list and turned into events;
//! events replace the list with a new one. A rejected command leaves the
//! list as it was and produces no effects.

use crate::types::{Task, TaskAction, TaskId, TaskList};
use std::sync::Arc;
use tasklist_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator, SystemClock, UuidGenerator},
    reducer::Reducer,
};

/// Environment dependencies for the task reducer
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of fresh task ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// System clock and random ids
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidGenerator))
    }
}

impl std::fmt::Debug for TaskEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the task list
#[derive(Clone, Debug, Default)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an event to state
    fn apply_event(state: &mut TaskList, event: &TaskAction) {
        tracing::debug!(event = event.event_type(), "Applying task event");

        match event {
            TaskAction::TaskAdded { task } => {
                *state = state.with_added(task.clone());
            },
            TaskAction::TaskToggled { id, done } => {
                *state = state.with_done(id, *done);
            },
            TaskAction::TaskRemoved { id } => {
                *state = state.without(id);
            },
            // Commands are not applied to state
            TaskAction::AddTask { .. }
            | TaskAction::ToggleTask { .. }
            | TaskAction::RemoveTask { .. } => {},
        }
    }

    /// Turns a command into the event it produces, or `None` if rejected
    fn decide(state: &TaskList, command: TaskAction, env: &TaskEnvironment) -> Option<TaskAction> {
        let decision = match command {
            TaskAction::AddTask { title } => state.check_add(&title).map(|title| TaskAction::TaskAdded {
                task: Task::new(TaskId::from_uuid(env.ids.next_id()), title, env.clock.now()),
            }),
            TaskAction::ToggleTask { id } => state
                .check_toggle(&id)
                .map(|task| TaskAction::TaskToggled { id, done: !task.done }),
            TaskAction::RemoveTask { id } => state
                .check_remove(&id)
                .map(|_| TaskAction::TaskRemoved { id }),
            event => Ok(event),
        };

        match decision {
            Ok(event) => Some(event),
            Err(rejection) => {
                tracing::debug!(%rejection, "Ignoring task command");
                None
            },
        }
    }
}

impl Reducer for TaskReducer {
    type State = TaskList;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if let Some(event) = Self::decide(state, action, env) {
            Self::apply_event(state, &event);
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_testing::{ReducerTest, SequentialIdGenerator, assertions, test_clock};
    use uuid::Uuid;

    fn create_test_env() -> TaskEnvironment {
        TaskEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new()))
    }

    fn id(n: u128) -> TaskId {
        TaskId::from_uuid(Uuid::from_u128(n))
    }

    fn seeded(titles: &[&str]) -> TaskList {
        let env = create_test_env();
        let mut state = TaskList::new();
        for title in titles {
            let _ = TaskReducer::new().reduce(
                &mut state,
                TaskAction::AddTask {
                    title: (*title).to_string(),
                },
                &env,
            );
        }
        state
    }

    #[test]
    fn test_add_task_success() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskList::new())
            .when_action(TaskAction::AddTask {
                title: "  Buy milk ".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                let task = &state.as_slice()[0];
                assert_eq!(task.id, id(1));
                assert_eq!(task.title, "Buy milk");
                assert!(!task.done);
                assert_eq!(task.created_at, test_clock().now());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_task_prepends() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskList::new())
            .when_actions(["first", "second", "third"].map(|title| TaskAction::AddTask {
                title: title.to_string(),
            }))
            .then_state(|state| {
                let titles: Vec<_> = state.iter().map(|t| t.title.as_str()).collect();
                assert_eq!(titles, ["third", "second", "first"]);
            })
            .run();
    }

    #[test]
    fn test_add_task_blank_title_is_ignored() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(seeded(&["existing"]))
            .when_actions([
                TaskAction::AddTask { title: String::new() },
                TaskAction::AddTask {
                    title: "   ".to_string(),
                },
            ])
            .then_state(|state| {
                assert_eq!(*state, seeded(&["existing"]));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_task_twice_restores() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(seeded(&["Buy milk"]))
            .when_action(TaskAction::ToggleTask { id: id(1) })
            .then_state(|state| {
                assert_eq!(state.completed_count(), 1);
                assert!(state.pending().is_empty());
            })
            .run();

        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(seeded(&["Buy milk"]))
            .when_actions([
                TaskAction::ToggleTask { id: id(1) },
                TaskAction::ToggleTask { id: id(1) },
            ])
            .then_state(|state| {
                assert_eq!(*state, seeded(&["Buy milk"]));
            })
            .run();
    }

    #[test]
    fn test_toggle_unknown_task_is_ignored() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(seeded(&["a", "b"]))
            .when_action(TaskAction::ToggleTask { id: id(42) })
            .then_state(|state| {
                assert_eq!(*state, seeded(&["a", "b"]));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_task() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(seeded(&["a", "b"]))
            .when_action(TaskAction::RemoveTask { id: id(1) })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert!(!state.contains(&id(1)));
                assert!(state.contains(&id(2)));
            })
            .run();
    }

    #[test]
    fn test_remove_unknown_task_is_ignored() {
        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(seeded(&["a"]))
            .when_action(TaskAction::RemoveTask { id: id(9) })
            .then_state(|state| {
                assert_eq!(*state, seeded(&["a"]));
            })
            .run();
    }

    #[test]
    fn test_event_replay_matches_command_path() {
        let commanded = seeded(&["a", "b"]);
        let events: Vec<_> = commanded
            .iter()
            .rev()
            .map(|task| TaskAction::TaskAdded { task: task.clone() })
            .collect();

        ReducerTest::new(TaskReducer::new())
            .with_env(create_test_env())
            .given_state(TaskList::new())
            .when_actions(events)
            .when_action(TaskAction::TaskToggled { id: id(2), done: true })
            .then_state(move |state| {
                assert_eq!(*state, commanded.with_done(&id(2), true));
            })
            .run();
    }

    #[test]
    fn test_buy_milk_scenario() {
        let env = create_test_env();
        let reducer = TaskReducer::new();
        let mut state = TaskList::new();

        let _ = reducer.reduce(
            &mut state,
            TaskAction::AddTask {
                title: "Buy milk".to_string(),
            },
            &env,
        );
        assert_eq!(state.len(), 1);
        let milk = state.as_slice()[0].id;
        assert_eq!(state.as_slice()[0].title, "Buy milk");
        assert!(!state.as_slice()[0].done);

        let _ = reducer.reduce(&mut state, TaskAction::ToggleTask { id: milk }, &env);
        assert_eq!(state.completed().len(), 1);
        assert!(state.pending().is_empty());

        let _ = reducer.reduce(&mut state, TaskAction::ToggleTask { id: milk }, &env);
        assert_eq!(state.pending().len(), 1);
        assert!(state.completed().is_empty());

        let _ = reducer.reduce(&mut state, TaskAction::RemoveTask { id: milk }, &env);
        assert!(state.is_empty());
    }
}

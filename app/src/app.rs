//! Root state and reducer.
//!
//! The task list and the UI flags are separate features with their own
//! reducers. [`AppReducer`] scopes both onto [`AppState`] so a single store
//! serves the presentation layer.

use crate::reducer::{TaskEnvironment, TaskReducer};
use crate::types::{Task, TaskAction, TaskId, TaskList};
use crate::ui::{Theme, UiAction, UiEnvironment, UiFlags, UiReducer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tasklist_core::{
    SmallVec,
    composition::{BoxedReducer, CombinedReducer, combine_reducers, scope_reducer},
    effect::Effect,
    reducer::Reducer,
};

/// Everything the presentation layer reads
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Task records, newest first
    pub tasks: TaskList,
    /// Presentation flags
    pub ui: UiFlags,
}

impl AppState {
    /// Creates the start-of-session state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks not yet done
    #[must_use]
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.pending()
    }

    /// Tasks marked done
    #[must_use]
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.completed()
    }

    /// Current color scheme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.ui.theme()
    }

    /// Tasks in display order: pending first, then completed
    #[must_use]
    pub fn display_order(&self) -> Vec<&Task> {
        let mut tasks = self.pending();
        tasks.extend(self.completed());
        tasks
    }

    /// Task at a 1-based position in [`AppState::display_order`]
    #[must_use]
    pub fn task_at(&self, position: usize) -> Option<&Task> {
        position
            .checked_sub(1)
            .and_then(|index| self.display_order().get(index).copied())
    }
}

/// Root action
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAction {
    /// Routed to the task list
    Task(TaskAction),
    /// Routed to the UI flags
    Ui(UiAction),
}

impl From<TaskAction> for AppAction {
    fn from(action: TaskAction) -> Self {
        Self::Task(action)
    }
}

impl From<UiAction> for AppAction {
    fn from(action: UiAction) -> Self {
        Self::Ui(action)
    }
}

impl AppAction {
    /// Variant name of the wrapped action, for logging
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::Task(action) => action.action_name(),
            Self::Ui(action) => action.action_name(),
        }
    }
}

/// Actions for "mark done": the toggle plus the done confirmation
#[must_use]
pub const fn complete_task(id: TaskId) -> [AppAction; 2] {
    [
        AppAction::Task(TaskAction::ToggleTask { id }),
        AppAction::Ui(UiAction::ShowDoneNotification),
    ]
}

/// Actions for "undo": the toggle plus the restored confirmation
#[must_use]
pub const fn reopen_task(id: TaskId) -> [AppAction; 2] {
    [
        AppAction::Task(TaskAction::ToggleTask { id }),
        AppAction::Ui(UiAction::ShowUndoNotification),
    ]
}

/// Dependencies for both features
#[derive(Clone, Debug)]
pub struct AppEnvironment {
    /// Task list dependencies
    pub tasks: TaskEnvironment,
    /// UI dependencies
    pub ui: UiEnvironment,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment`
    #[must_use]
    pub const fn new(tasks: TaskEnvironment, ui: UiEnvironment) -> Self {
        Self { tasks, ui }
    }

    /// System clock, random ids and the given auto-dismiss delay
    #[must_use]
    pub fn production(notification_timeout: Option<Duration>) -> Self {
        Self::new(
            TaskEnvironment::production(),
            UiEnvironment::new(notification_timeout),
        )
    }
}

fn task_state(state: &mut AppState) -> &mut TaskList {
    &mut state.tasks
}

fn ui_state(state: &mut AppState) -> &mut UiFlags {
    &mut state.ui
}

fn task_environment(env: &AppEnvironment) -> &TaskEnvironment {
    &env.tasks
}

fn ui_environment(env: &AppEnvironment) -> &UiEnvironment {
    &env.ui
}

fn task_action(action: AppAction) -> Option<TaskAction> {
    match action {
        AppAction::Task(action) => Some(action),
        AppAction::Ui(_) => None,
    }
}

fn ui_action(action: AppAction) -> Option<UiAction> {
    match action {
        AppAction::Ui(action) => Some(action),
        AppAction::Task(_) => None,
    }
}

/// Root reducer: the task and UI reducers scoped onto [`AppState`]
///
/// Cloning shares the composed reducer.
#[derive(Clone)]
pub struct AppReducer {
    inner: Arc<CombinedReducer<AppState, AppAction, AppEnvironment>>,
}

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub fn new() -> Self {
        let features: Vec<BoxedReducer<AppState, AppAction, AppEnvironment>> = vec![
            Box::new(scope_reducer(
                TaskReducer::new(),
                task_state,
                task_action,
                AppAction::Task,
                task_environment,
            )),
            Box::new(scope_reducer(
                UiReducer::new(),
                ui_state,
                ui_action,
                AppAction::Ui,
                ui_environment,
            )),
        ];

        Self {
            inner: Arc::new(combine_reducers(features)),
        }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppReducer")
            .field("features", &self.inner.len())
            .finish()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        self.inner.reduce(state, action, env)
    }
}

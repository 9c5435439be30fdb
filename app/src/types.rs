//! Domain types for the task list.
//!
//! A task list is an ordered collection of task records, newest first.
//! Records are created by add, flipped by toggle and dropped by remove.
//! Every transition on [`TaskList`] returns a new list and leaves the
//! receiver untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasklist_macros::Action;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Whether the task is done
    pub done: bool,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet done task
    #[must_use]
    pub const fn new(id: TaskId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            done: false,
            created_at,
        }
    }

    /// Returns a copy with `done` set to `done`
    #[must_use]
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }
}

/// Why a task command had no effect
///
/// The reducer treats every rejection as a no-op; this type lets callers
/// that care find out why.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TaskRejection {
    /// The title was empty after trimming
    #[error("task title cannot be empty")]
    EmptyTitle,

    /// No task with this id exists
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Ordered task records, newest first
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in list order
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// All tasks in list order, as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns a task by ID
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Tasks not yet done, in list order
    #[must_use]
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.done).collect()
    }

    /// Tasks marked done, in list order
    #[must_use]
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.done).collect()
    }

    /// Number of tasks not yet done
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    /// Number of tasks marked done
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    /// Validates a title for `AddTask`, returning it trimmed
    ///
    /// # Errors
    ///
    /// Returns [`TaskRejection::EmptyTitle`] if nothing is left after trimming.
    pub fn check_add(&self, title: &str) -> Result<String, TaskRejection> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskRejection::EmptyTitle);
        }
        Ok(title.to_string())
    }

    /// Validates `ToggleTask`, returning the task that would flip
    ///
    /// # Errors
    ///
    /// Returns [`TaskRejection::NotFound`] if no task has this id.
    pub fn check_toggle(&self, id: &TaskId) -> Result<&Task, TaskRejection> {
        self.get(id).ok_or(TaskRejection::NotFound(*id))
    }

    /// Validates `RemoveTask`, returning the task that would be removed
    ///
    /// # Errors
    ///
    /// Returns [`TaskRejection::NotFound`] if no task has this id.
    pub fn check_remove(&self, id: &TaskId) -> Result<&Task, TaskRejection> {
        self.get(id).ok_or(TaskRejection::NotFound(*id))
    }

    /// Returns a list with `task` placed in front
    #[must_use]
    pub fn with_added(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.push(task);
        tasks.extend(self.tasks.iter().cloned());
        Self { tasks }
    }

    /// Returns a list where the matching task has `done` set to `done`
    ///
    /// Unknown ids leave the list as it was.
    #[must_use]
    pub fn with_done(&self, id: &TaskId, done: bool) -> Self {
        let tasks = self
            .tasks
            .iter()
            .map(|task| if task.id == *id { task.with_done(done) } else { task.clone() })
            .collect();
        Self { tasks }
    }

    /// Returns a list where the matching task's `done` flag is flipped
    ///
    /// Unknown ids leave the list as it was.
    #[must_use]
    pub fn with_toggled(&self, id: &TaskId) -> Self {
        match self.get(id) {
            Some(task) => self.with_done(id, !task.done),
            None => self.clone(),
        }
    }

    /// Returns a list without the matching task
    ///
    /// Unknown ids leave the list as it was.
    #[must_use]
    pub fn without(&self, id: &TaskId) -> Self {
        let tasks = self.tasks.iter().filter(|task| task.id != *id).cloned().collect();
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// Actions representing commands and events for the task list
///
/// Commands carry user intent and are validated by the reducer. Valid
/// commands become events; events are applied to state unconditionally,
/// so replaying them rebuilds the same list.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    // ========== Commands ==========
    /// Command: Add a task with this title
    #[command]
    AddTask {
        /// Title as typed; trimmed by the reducer
        title: String,
    },

    /// Command: Flip a task between pending and done
    #[command]
    ToggleTask {
        /// Task to toggle
        id: TaskId,
    },

    /// Command: Remove a task
    #[command]
    RemoveTask {
        /// Task to remove
        id: TaskId,
    },

    // ========== Events ==========
    /// Event: A task was added
    #[event]
    TaskAdded {
        /// The new record
        task: Task,
    },

    /// Event: A task's done flag changed
    #[event]
    TaskToggled {
        /// Task identifier
        id: TaskId,
        /// The flag's new value
        done: bool,
    },

    /// Event: A task was removed
    #[event]
    TaskRemoved {
        /// Task identifier
        id: TaskId,
    },
}

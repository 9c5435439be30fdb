//! Single-screen task list.
//!
//! Two features share one store:
//!
//! - **Task list** ([`TaskReducer`] over [`TaskList`]): add, toggle and
//!   remove task records, with pending/completed views
//! - **UI flags** ([`UiReducer`] over [`UiFlags`]): theme, intro banner and
//!   the done/restored confirmations, which dismiss themselves after a delay
//!
//! [`AppReducer`] scopes both onto [`AppState`]. The [`shell`] module is a
//! terminal front end that reads views and dispatches actions.
//!
//! # Quick Start
//!
//! ```no_run
//! use tasklist::{AppAction, AppEnvironment, AppReducer, AppState, TaskAction, complete_task};
//! use tasklist_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(AppState::new(), AppReducer::new(), AppEnvironment::production(None));
//!
//! store
//!     .send(AppAction::Task(TaskAction::AddTask {
//!         title: "Buy milk".to_string(),
//!     }))
//!     .await?;
//!
//! let id = store.state(|s| s.tasks.as_slice()[0].id).await;
//! for action in complete_task(id) {
//!     store.send(action).await?;
//! }
//!
//! let done = store.state(|s| s.completed().len()).await;
//! println!("Completed: {done}");
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod reducer;
pub mod shell;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use app::{AppAction, AppEnvironment, AppReducer, AppState, complete_task, reopen_task};
pub use config::Config;
pub use reducer::{TaskEnvironment, TaskReducer};
pub use types::{Task, TaskAction, TaskId, TaskList, TaskRejection};
pub use ui::{Theme, UiAction, UiEnvironment, UiFlags, UiReducer};

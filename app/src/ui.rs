//! Presentation flags: theme, intro banner and the two confirmation banners.
//!
//! Each flag is an independent latch. Showing a notification can schedule
//! its own expiry through an effect, but the flag transitions themselves
//! never look at any other flag.
//!
//! Every show bumps that notification's generation. An expiry only hides
//! the notification it was scheduled for, so a timer left over from an
//! earlier show cannot cut a later one short.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tasklist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use tasklist_macros::Action;

/// Default time a confirmation banner stays up
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(2500);

/// Color scheme derived from [`UiFlags::dark_mode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    /// Light background
    Light,
    /// Dark background
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Ephemeral presentation flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // four independent latches
pub struct UiFlags {
    /// Dark theme selected
    pub dark_mode: bool,
    /// Intro banner still showing
    pub show_banner: bool,
    /// "Task done" confirmation showing
    pub done_notification_visible: bool,
    /// "Task restored" confirmation showing
    pub undo_notification_visible: bool,
    /// Number of times the "task done" confirmation was shown
    pub done_notification_generation: u64,
    /// Number of times the "task restored" confirmation was shown
    pub undo_notification_generation: u64,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_banner: true,
            done_notification_visible: false,
            undo_notification_visible: false,
            done_notification_generation: 0,
            undo_notification_generation: 0,
        }
    }
}

impl UiFlags {
    /// Returns the flags after `action`
    #[must_use]
    pub const fn apply(self, action: &UiAction) -> Self {
        match action {
            UiAction::ToggleDarkMode => Self {
                dark_mode: !self.dark_mode,
                ..self
            },
            UiAction::DismissBanner => Self {
                show_banner: false,
                ..self
            },
            UiAction::ShowDoneNotification => Self {
                done_notification_visible: true,
                done_notification_generation: self.done_notification_generation.wrapping_add(1),
                ..self
            },
            UiAction::DismissDoneNotification => Self {
                done_notification_visible: false,
                ..self
            },
            UiAction::ExpireDoneNotification { generation } => Self {
                done_notification_visible: self.done_notification_visible
                    && *generation != self.done_notification_generation,
                ..self
            },
            UiAction::ShowUndoNotification => Self {
                undo_notification_visible: true,
                undo_notification_generation: self.undo_notification_generation.wrapping_add(1),
                ..self
            },
            UiAction::DismissUndoNotification => Self {
                undo_notification_visible: false,
                ..self
            },
            UiAction::ExpireUndoNotification { generation } => Self {
                undo_notification_visible: self.undo_notification_visible
                    && *generation != self.undo_notification_generation,
                ..self
            },
        }
    }

    /// Current color scheme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        if self.dark_mode { Theme::Dark } else { Theme::Light }
    }
}

/// Flag transitions, one per latch operation
#[derive(Action, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiAction {
    /// Switch between light and dark theme
    ToggleDarkMode,
    /// Hide the intro banner for the rest of the session
    DismissBanner,
    /// Show the "task done" confirmation
    ShowDoneNotification,
    /// Hide the "task done" confirmation
    DismissDoneNotification,
    /// Auto-dismiss timer for one showing of the "task done" confirmation
    ///
    /// No-op unless `generation` is still the current one.
    ExpireDoneNotification {
        /// Generation the timer was started for
        generation: u64,
    },
    /// Show the "task restored" confirmation
    ShowUndoNotification,
    /// Hide the "task restored" confirmation
    DismissUndoNotification,
    /// Auto-dismiss timer for one showing of the "task restored" confirmation
    ExpireUndoNotification {
        /// Generation the timer was started for
        generation: u64,
    },
}

/// Environment for the UI reducer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiEnvironment {
    /// Auto-dismiss delay for confirmations; `None` keeps them up until
    /// dismissed explicitly
    pub notification_timeout: Option<Duration>,
}

impl UiEnvironment {
    /// Creates a new `UiEnvironment`
    #[must_use]
    pub const fn new(notification_timeout: Option<Duration>) -> Self {
        Self {
            notification_timeout,
        }
    }
}

impl Default for UiEnvironment {
    fn default() -> Self {
        Self::new(Some(DEFAULT_NOTIFICATION_TIMEOUT))
    }
}

/// Reducer for the presentation flags
#[derive(Clone, Debug, Default)]
pub struct UiReducer;

impl UiReducer {
    /// Creates a new `UiReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for UiReducer {
    type State = UiFlags;
    type Action = UiAction;
    type Environment = UiEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(action = action.action_name(), "Applying UI action");
        *state = state.apply(&action);

        let expiry = match action {
            UiAction::ShowDoneNotification => UiAction::ExpireDoneNotification {
                generation: state.done_notification_generation,
            },
            UiAction::ShowUndoNotification => UiAction::ExpireUndoNotification {
                generation: state.undo_notification_generation,
            },
            _ => return SmallVec::new(),
        };

        match env.notification_timeout {
            Some(timeout) => smallvec![Effect::delay(timeout, expiry)],
            None => SmallVec::new(),
        }
    }
}

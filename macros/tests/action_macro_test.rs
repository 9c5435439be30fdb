//! Tests for #[derive(Action)] macro

use tasklist_macros::Action;
use uuid::Uuid;

#[derive(Action, Clone, Debug, PartialEq)]
enum TaskAction {
    #[command]
    AddTask {
        title: String,
    },

    #[command]
    ToggleTask(Uuid),

    #[event]
    TaskAdded {
        id: Uuid,
        title: String,
    },

    #[event]
    TaskToggled {
        id: Uuid,
        done: bool,
    },

    #[event]
    Cleared,

    Refresh,
}

#[test]
fn test_is_command() {
    let action = TaskAction::AddTask {
        title: "Buy milk".to_string(),
    };
    assert!(action.is_command());
    assert!(!action.is_event());
}

#[test]
fn test_is_event() {
    let action = TaskAction::TaskAdded {
        id: Uuid::nil(),
        title: "Buy milk".to_string(),
    };
    assert!(!action.is_command());
    assert!(action.is_event());
}

#[test]
fn test_event_type() {
    let action = TaskAction::TaskToggled {
        id: Uuid::nil(),
        done: true,
    };
    assert_eq!(action.event_type(), "TaskToggled.v1");
    assert_eq!(TaskAction::Cleared.event_type(), "Cleared.v1");
}

#[test]
fn test_command_event_type() {
    let action = TaskAction::ToggleTask(Uuid::nil());
    // Commands don't have event types
    assert_eq!(action.event_type(), "unknown");
}

#[test]
fn test_unmarked_variant() {
    let action = TaskAction::Refresh;
    assert!(!action.is_command());
    assert!(!action.is_event());
    assert_eq!(action.event_type(), "unknown");
}

#[test]
fn test_action_name_covers_every_shape() {
    let cases = vec![
        (
            TaskAction::AddTask {
                title: "x".to_string(),
            },
            "AddTask",
        ),
        (TaskAction::ToggleTask(Uuid::nil()), "ToggleTask"),
        (TaskAction::Cleared, "Cleared"),
        (TaskAction::Refresh, "Refresh"),
    ];

    for (action, expected) in cases {
        assert_eq!(action.action_name(), expected, "{action:?}");
    }
}

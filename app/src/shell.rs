//! Line-oriented terminal front end.
//!
//! The shell only reads state through [`Store::state`] and only changes it
//! through [`Store::send`]. Each input line is handled to completion before
//! the next one is read.

use crate::app::{AppAction, AppEnvironment, AppReducer, AppState, complete_task, reopen_task};
use crate::types::{Task, TaskAction};
use crate::ui::UiAction;
use std::fmt::Write as _;
use std::str::FromStr;
use tasklist_runtime::{Store, StoreError};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// The store the shell drives
pub type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

/// Printed by `help`
pub const HELP: &str = "\
commands:
  add <title>   add a task
  done <n>      mark task n as done
  undo <n>      move task n back to pending
  rm <n>        remove task n
  theme         switch between light and dark theme
  dismiss       hide the welcome banner
  list          show the list
  help          show this help
  quit          exit
";

const BANNER: &str = "Welcome! Type `help` for commands, `dismiss` to hide this.";

/// Errors that end a shell session
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading input or writing output failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store refused an action
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Why an input line is not a command
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace
    #[error("empty input")]
    Empty,

    /// First word is not a known command
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    /// A command that needs an argument got none
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    /// A position was not a positive number
    #[error("`{0}` is not a task number")]
    InvalidPosition(String),
}

/// One parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <title>`
    Add(String),
    /// `done <n>`
    Done(usize),
    /// `undo <n>`
    Undo(usize),
    /// `rm <n>`
    Remove(usize),
    /// `theme`
    Theme,
    /// `dismiss`
    Dismiss,
    /// `list`
    List,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

fn position(command: &'static str, arg: &str) -> Result<usize, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidPosition(arg.to_string())),
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add(rest.to_string())),
            "done" => position("done", rest).map(Self::Done),
            "undo" => position("undo", rest).map(Self::Undo),
            "rm" | "remove" => position("rm", rest).map(Self::Remove),
            "theme" => Ok(Self::Theme),
            "dismiss" => Ok(Self::Dismiss),
            "list" | "ls" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ParseError::Unknown(word.to_string())),
        }
    }
}

fn render_task(out: &mut String, position: usize, task: &Task) {
    let mark = if task.done { 'x' } else { ' ' };
    let _ = writeln!(out, "  {position}. [{mark}] {}", task.title);
}

/// Renders the screen for `state`
///
/// Positions are 1-based and follow [`AppState::display_order`].
#[must_use]
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    if state.ui.show_banner {
        let _ = writeln!(out, "{BANNER}");
    }
    let _ = writeln!(out, "theme: {}", state.theme());

    let pending = state.pending();
    let completed = state.completed();

    if pending.is_empty() && completed.is_empty() {
        let _ = writeln!(out, "No tasks yet.");
    } else {
        let _ = writeln!(out, "Pending ({}):", pending.len());
        for (index, task) in pending.iter().enumerate() {
            render_task(&mut out, index + 1, task);
        }
        let _ = writeln!(out, "Completed ({}):", completed.len());
        for (index, task) in completed.iter().enumerate() {
            render_task(&mut out, pending.len() + index + 1, task);
        }
    }

    if state.ui.done_notification_visible {
        let _ = writeln!(out, "* Task done");
    }
    if state.ui.undo_notification_visible {
        let _ = writeln!(out, "* Task restored");
    }

    out
}

/// What the shell does after handling a line
enum Outcome {
    /// State changed or was asked for; print the screen
    Changed,
    /// Print this message only
    Message(String),
    /// End the session
    Quit,
}

async fn dispatch<I>(store: &AppStore, actions: I) -> Result<(), StoreError>
where
    I: IntoIterator<Item = AppAction>,
{
    for action in actions {
        tracing::debug!(action = action.action_name(), "Dispatching");
        let _handle = store.send(action).await?;
    }
    Ok(())
}

async fn handle(store: &AppStore, command: Command) -> Result<Outcome, StoreError> {
    let outcome = match command {
        Command::Add(title) => {
            if let Err(rejection) = store.state(|s| s.tasks.check_add(&title)).await {
                return Ok(Outcome::Message(format!("not added: {rejection}")));
            }
            dispatch(store, [AppAction::Task(TaskAction::AddTask { title })]).await?;
            Outcome::Changed
        },
        Command::Done(n) => match store.state(|s| s.task_at(n).map(|t| (t.id, t.done))).await {
            None => Outcome::Message(format!("no task at position {n}")),
            Some((_, true)) => Outcome::Message(format!("task {n} is already done")),
            Some((id, false)) => {
                dispatch(store, complete_task(id)).await?;
                Outcome::Changed
            },
        },
        Command::Undo(n) => match store.state(|s| s.task_at(n).map(|t| (t.id, t.done))).await {
            None => Outcome::Message(format!("no task at position {n}")),
            Some((_, false)) => Outcome::Message(format!("task {n} is not done")),
            Some((id, true)) => {
                dispatch(store, reopen_task(id)).await?;
                Outcome::Changed
            },
        },
        Command::Remove(n) => match store.state(|s| s.task_at(n).map(|t| t.id)).await {
            None => Outcome::Message(format!("no task at position {n}")),
            Some(id) => {
                dispatch(store, [AppAction::Task(TaskAction::RemoveTask { id })]).await?;
                Outcome::Changed
            },
        },
        Command::Theme => {
            dispatch(store, [AppAction::Ui(UiAction::ToggleDarkMode)]).await?;
            Outcome::Changed
        },
        Command::Dismiss => {
            dispatch(store, [AppAction::Ui(UiAction::DismissBanner)]).await?;
            Outcome::Changed
        },
        Command::List => Outcome::Changed,
        Command::Help => Outcome::Message(HELP.to_string()),
        Command::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Runs a session until `quit` or end of input
///
/// # Errors
///
/// Returns [`ShellError::Io`] if reading or writing fails and
/// [`ShellError::Store`] if the store rejects an action, e.g. because it is
/// shutting down.
pub async fn run<R, W>(store: &AppStore, input: R, mut output: W) -> Result<(), ShellError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let screen = store.state(render).await;
    output.write_all(screen.as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            tracing::debug!("End of input");
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(error) => {
                output.write_all(format!("{error}\n").as_bytes()).await?;
                continue;
            },
        };

        match handle(store, command).await? {
            Outcome::Changed => {
                let screen = store.state(render).await;
                output.write_all(screen.as_bytes()).await?;
            },
            Outcome::Message(message) => {
                output.write_all(message.as_bytes()).await?;
                if !message.ends_with('\n') {
                    output.write_all(b"\n").await?;
                }
            },
            Outcome::Quit => break,
        }
    }

    output.flush().await?;
    Ok(())
}

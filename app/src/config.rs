//! Configuration management for the task list shell.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Fallback log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default auto-dismiss delay for confirmation banners, in milliseconds
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 2500;

/// Default graceful shutdown timeout, in seconds
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub log_level: String,
    /// Auto-dismiss delay for confirmations in milliseconds (0 = never)
    pub notification_timeout_ms: u64,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Unset or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("TASKLIST_LOG_LEVEL")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            notification_timeout_ms: lookup("TASKLIST_NOTIFICATION_TIMEOUT_MS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_NOTIFICATION_TIMEOUT_MS),
            shutdown_timeout_secs: lookup("TASKLIST_SHUTDOWN_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
        }
    }

    /// Auto-dismiss delay, `None` when disabled
    #[must_use]
    pub const fn notification_timeout(&self) -> Option<Duration> {
        match self.notification_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Graceful shutdown timeout
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

//! Terminal task list.
//!
//! Reads one command per line from stdin; `help` lists them. Logs go to
//! stderr so they do not mix with the list.

use tasklist::{AppEnvironment, AppReducer, AppState, Config, shell};
use tasklist_runtime::{Store, StoreConfig, StoreError};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        notification_timeout_ms = config.notification_timeout_ms,
        shutdown_timeout_secs = config.shutdown_timeout_secs,
        "Configuration loaded"
    );

    let store = Store::with_config(
        AppState::new(),
        AppReducer::new(),
        AppEnvironment::production(config.notification_timeout()),
        StoreConfig::default().with_shutdown_timeout(config.shutdown_timeout()),
    );

    shell::run(&store, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    match store.shutdown(store.config().default_shutdown_timeout).await {
        Ok(()) => info!("Shutdown complete"),
        Err(StoreError::ShutdownTimeout(pending)) => {
            warn!(pending, "Exiting with effects still pending");
        },
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

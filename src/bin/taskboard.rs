//! Serves the task management pages.
//!
//! Usage:
//!
//! ```text
//! taskboard [--bind ADDR] [--database-url URL] [--pool-size N] [--admin-token TOKEN]
//! ```
//!
//! Flags fall back to `TASKBOARD_BIND`, `DATABASE_URL`, `TASKBOARD_POOL_SIZE`
//! and `TASKBOARD_ADMIN_TOKEN`, read from the environment or a `.env` file.
//! Log output is filtered with `RUST_LOG`.

use clap::Parser;
use taskboard::{config::ServerArgs, server};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "taskboard=info";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let dotenv_result = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match dotenv_result {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "ignoring unreadable environment file"),
    }

    let config = ServerArgs::parse().into_config()?;
    debug!(?config, "configuration loaded");
    server::run(config).await?;
    Ok(())
}

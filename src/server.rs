//! Server bootstrap: store selection, schema setup and HTTP serving.

use crate::config::{AdminToken, ServerConfig, StoreConfig};
use crate::session::adapters::InMemorySessionStore;
use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::adapters::postgres::{PostgresTaskRepository, apply_schema};
use crate::task::ports::TaskRepositoryError;
use crate::web::{AdminGate, AppState, PageRenderer, build_router};
use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The embedded templates failed to compile.
    #[error("failed to load templates: {0}")]
    Templates(#[from] minijinja::Error),

    /// The database pool could not be created.
    #[error("failed to create database pool: {0}")]
    Pool(#[from] PoolError),

    /// The `tasks` table could not be created.
    #[error("failed to apply database schema: {0}")]
    Schema(#[from] TaskRepositoryError),

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: SocketAddr,
        /// Socket error.
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the configured stores and serves until interrupted.
///
/// # Errors
///
/// Returns [`ServerError`] when start-up fails or the server stops with an
/// I/O error.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let renderer = Arc::new(PageRenderer::new()?);
    let sessions = Arc::new(InMemorySessionStore::new());
    let gate = AdminGate::from_token(config.admin_token.as_ref().map(AdminToken::expose));
    if config.admin_token.is_none() {
        warn!("no admin token configured; task pages are open to every client");
    }

    match config.store {
        StoreConfig::InMemory => {
            warn!("no database configured; tasks are kept in memory");
            let repository = Arc::new(InMemoryTaskRepository::new());
            let state = AppState::new(repository, sessions, renderer);
            serve(config.bind, build_router(state, gate)).await
        }
        StoreConfig::Postgres {
            database_url,
            pool_size,
        } => {
            let manager = ConnectionManager::<PgConnection>::new(database_url);
            let pool = Pool::builder().max_size(pool_size).build(manager)?;
            apply_schema(&pool).await?;
            info!(pool_size, "connected to PostgreSQL");
            let repository = Arc::new(PostgresTaskRepository::new(pool));
            let state = AppState::new(repository, sessions, renderer);
            serve(config.bind, build_router(state, gate)).await
        }
    }
}

async fn serve(addr: SocketAddr, router: Router) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "serving task pages");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => warn!(error = %err, "failed to listen for shutdown signal"),
    }
}

//! Server configuration from the command line and environment.
//!
//! Every flag has an environment fallback so the server can be configured
//! from a `.env` file. [`ServerArgs::into_config`] validates the raw values
//! into a [`ServerConfig`].

use clap::Parser;
use std::fmt;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

/// Raw command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard", version, about = "Serve the task management pages")]
pub struct ServerArgs {
    /// Address to listen on.
    #[arg(long, env = "TASKBOARD_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// `PostgreSQL` connection URL; tasks are kept in memory when absent.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TASKBOARD_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,

    /// Bearer token required on every request; the pages are open when absent.
    #[arg(long, env = "TASKBOARD_ADMIN_TOKEN", hide_env_values = true)]
    pub admin_token: Option<String>,
}

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The bind address is not `host:port`.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBind {
        /// Rejected value.
        value: String,
        /// Parser failure.
        source: AddrParseError,
    },

    /// The database URL was set but blank.
    #[error("database URL must not be empty")]
    EmptyDatabaseUrl,

    /// The pool size was zero.
    #[error("pool size must be at least 1")]
    ZeroPoolSize,

    /// The admin token was set but blank.
    #[error("admin token must not be empty")]
    EmptyAdminToken,
}

/// Where tasks are stored.
#[derive(Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Process-local storage, lost on restart.
    InMemory,
    /// `PostgreSQL` through a connection pool.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Maximum pooled connections.
        pool_size: u32,
    },
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => f.write_str("InMemory"),
            Self::Postgres { pool_size, .. } => f
                .debug_struct("Postgres")
                .field("database_url", &"<redacted>")
                .field("pool_size", pool_size)
                .finish(),
        }
    }
}

/// Shared admin token; never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    /// Returns the token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(<redacted>)")
    }
}

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listening address.
    pub bind: SocketAddr,
    /// Task storage.
    pub store: StoreConfig,
    /// Admin token; `None` leaves the pages open.
    pub admin_token: Option<AdminToken>,
}

impl ServerArgs {
    /// Validates the raw arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable bind address, a zero pool
    /// size, or a blank database URL or admin token.
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let bind = self
            .bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBind {
                value: self.bind.clone(),
                source,
            })?;

        if self.pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }

        let store = match self.database_url {
            None => StoreConfig::InMemory,
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyDatabaseUrl),
            Some(url) => StoreConfig::Postgres {
                database_url: url.trim().to_owned(),
                pool_size: self.pool_size,
            },
        };

        let admin_token = match self.admin_token {
            None => None,
            Some(token) if token.trim().is_empty() => return Err(ConfigError::EmptyAdminToken),
            Some(token) => Some(AdminToken(token.trim().to_owned())),
        };

        Ok(ServerConfig {
            bind,
            store,
            admin_token,
        })
    }
}

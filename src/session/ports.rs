//! Session storage port.

use super::{SessionId, SessionState};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Session persistence contract.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the state of a session.
    ///
    /// Returns `None` for an unknown or expired session.
    async fn load(&self, id: SessionId) -> SessionStoreResult<Option<SessionState>>;

    /// Stores the state of a session, replacing any previous state.
    ///
    /// Implementations may drop idle sessions to bound their size.
    async fn save(&self, id: SessionId, state: &SessionState) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Storage-layer failure.
    #[error("session storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

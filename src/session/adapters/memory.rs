//! In-memory session store.

use crate::session::{SessionId, SessionState, SessionStore, SessionStoreError, SessionStoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Idle time after which a session is forgotten.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Maximum number of sessions kept at once.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone)]
struct StoredSession {
    state: SessionState,
    last_access: Instant,
}

impl StoredSession {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_access) >= ttl
    }
}

/// Process-local session store; sessions are lost on restart.
///
/// Sessions idle for longer than the TTL are dropped, and once the store is
/// full the least recently used session makes room for a new one.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, StoredSession>>>,
    ttl: Duration,
    capacity: usize,
}

impl InMemorySessionStore {
    /// Creates an empty store with the default TTL and capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }

    /// Creates an empty store with an explicit idle TTL and capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Returns the number of sessions currently held, expired ones included
    /// until the next save prunes them.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Storage`] when the lock is poisoned.
    pub fn session_count(&self) -> SessionStoreResult<usize> {
        let sessions = self.sessions.read().map_err(|err| lock_error(&err))?;
        Ok(sessions.len())
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(err: &impl std::fmt::Display) -> SessionStoreError {
    SessionStoreError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: SessionId) -> SessionStoreResult<Option<SessionState>> {
        let mut sessions = self.sessions.write().map_err(|err| lock_error(&err))?;
        let now = Instant::now();
        let Some(stored) = sessions.get_mut(&id) else {
            return Ok(None);
        };
        if stored.is_expired(now, self.ttl) {
            sessions.remove(&id);
            return Ok(None);
        }
        stored.last_access = now;
        Ok(Some(stored.state.clone()))
    }

    async fn save(&self, id: SessionId, state: &SessionState) -> SessionStoreResult<()> {
        let mut sessions = self.sessions.write().map_err(|err| lock_error(&err))?;
        let now = Instant::now();
        sessions.retain(|_, stored| !stored.is_expired(now, self.ttl));

        if !sessions.contains_key(&id) && sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, stored)| stored.last_access)
                .map(|(oldest_id, _)| *oldest_id);
            if let Some(oldest_id) = oldest {
                sessions.remove(&oldest_id);
            }
        }

        sessions.insert(
            id,
            StoredSession {
                state: state.clone(),
                last_access: now,
            },
        );
        Ok(())
    }
}

//! Session store adapters.

mod memory;

pub use memory::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL, InMemorySessionStore};

//! Per-browser session state.
//!
//! A session holds the page-size preference for the task list and at most
//! one pending flash message. Sessions are addressed by a random cookie
//! value and stored behind the [`ports::SessionStore`] port.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{SessionId, SessionState};
pub use ports::{SessionStore, SessionStoreError, SessionStoreResult};

//! Session identifiers and stored session state.

use crate::task::domain::PerPage;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque session identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a cookie value; malformed values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State kept between requests of one browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    per_page: PerPage,
    flash: Option<String>,
}

impl SessionState {
    /// Returns the stored page-size preference.
    #[must_use]
    pub const fn per_page(&self) -> PerPage {
        self.per_page
    }

    /// Replaces the page-size preference.
    pub const fn set_per_page(&mut self, per_page: PerPage) {
        self.per_page = per_page;
    }

    /// Queues a flash message, replacing any unread one.
    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = Some(message.into());
    }

    /// Removes and returns the pending flash message.
    pub const fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}

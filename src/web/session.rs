//! Session cookie handling for request handlers.

use super::WebError;
use crate::session::{SessionId, SessionState, SessionStore, SessionStoreResult};
use crate::task::services::{Redirect, RequestContext};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use cookie::{Cookie, SameSite};

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE: &str = "taskboard_session";

/// Session state loaded for the duration of one request.
///
/// A new session is only stored, and its cookie only issued, once
/// something has been written to it.
#[derive(Debug)]
pub struct SessionHandle {
    id: SessionId,
    state: SessionState,
    is_new: bool,
    dirty: bool,
}

impl SessionHandle {
    /// Loads the session named by the request cookie, or starts a new one.
    ///
    /// # Errors
    ///
    /// Returns the store error when loading fails.
    pub async fn open<S>(store: &S, headers: &HeaderMap) -> SessionStoreResult<Self>
    where
        S: SessionStore + ?Sized,
    {
        if let Some(id) = session_id_from_headers(headers)
            && let Some(state) = store.load(id).await?
        {
            return Ok(Self {
                id,
                state,
                is_new: false,
                dirty: false,
            });
        }
        Ok(Self {
            id: SessionId::new(),
            state: SessionState::default(),
            is_new: true,
            dirty: false,
        })
    }

    /// Returns the request context resolved from this session.
    #[must_use]
    pub const fn context(&self) -> RequestContext {
        RequestContext::new(self.state.per_page())
    }

    /// Removes and returns the pending flash message.
    pub fn take_flash(&mut self) -> Option<String> {
        let flash = self.state.take_flash();
        if flash.is_some() {
            self.dirty = true;
        }
        flash
    }

    /// Records the session changes carried by a redirect.
    pub fn apply(&mut self, redirect: &Redirect) {
        if let Some(message) = redirect.flash() {
            self.state.set_flash(message);
            self.dirty = true;
        }
        if let Some(per_page) = redirect.per_page() {
            self.state.set_per_page(per_page);
            self.dirty = true;
        }
    }

    /// Saves changed state and issues the cookie for a new session.
    ///
    /// # Errors
    ///
    /// Returns [`WebError`] when saving fails or the cookie cannot be
    /// encoded as a header.
    pub async fn close<S>(self, store: &S, response: &mut Response) -> Result<(), WebError>
    where
        S: SessionStore + ?Sized,
    {
        if !self.dirty {
            return Ok(());
        }
        store.save(self.id, &self.state).await?;
        if self.is_new {
            let cookie = HeaderValue::from_str(&session_cookie(self.id))?;
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        Ok(())
    }
}

fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .and_then(|cookie| SessionId::parse(cookie.value()))
}

fn session_cookie(id: SessionId) -> String {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
        .to_string()
}

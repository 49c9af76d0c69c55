//! Admin gate in front of every task route.

use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use sha2::{Digest, Sha256};
use tracing::warn;

const UNAUTHORIZED_PAGE: &str = concat!(
    "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">",
    "<title>Not Allowed</title></head><body><h1>Not Allowed</h1>",
    "<p>Administrator credentials are required to manage tasks.</p>",
    "</body></html>",
);

/// Shared-token check applied to every request.
///
/// Only a SHA-256 digest of the configured token is kept. Without a
/// configured token the gate lets every request through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminGate {
    token_digest: Option<[u8; 32]>,
}

impl AdminGate {
    /// Creates a gate that allows every request.
    #[must_use]
    pub const fn open() -> Self {
        Self { token_digest: None }
    }

    /// Creates a gate requiring `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token_digest: Some(digest(token)),
        }
    }

    /// Creates a gate from an optional configured token.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        token.map_or_else(Self::open, Self::with_token)
    }

    /// Returns `true` when the request may proceed.
    #[must_use]
    pub fn allows(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = self.token_digest else {
            return true;
        };
        bearer_token(headers).is_some_and(|token| digest(token) == expected)
    }
}

fn digest(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

/// Middleware rejecting requests the [`AdminGate`] does not allow.
pub async fn require_admin(State(gate): State<AdminGate>, request: Request, next: Next) -> Response {
    if gate.allows(request.headers()) {
        return next.run(request).await;
    }
    warn!(path = %request.uri().path(), "rejected request without admin credentials");
    (
        StatusCode::UNAUTHORIZED,
        [(WWW_AUTHENTICATE, "Bearer")],
        Html(UNAUTHORIZED_PAGE),
    )
        .into_response()
}

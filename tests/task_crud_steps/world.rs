//! Shared world state for task CRUD BDD scenarios.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rstest::fixture;
use taskboard::session::adapters::InMemorySessionStore;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::web::{AdminGate, AppState, PageRenderer, build_router};
use tower::ServiceExt;

/// What the browser saw for the last request.
pub struct LastResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Scenario world driving the router like a browser with cookies.
pub struct TaskCrudWorld {
    pub router: Router,
    pub repo: Arc<InMemoryTaskRepository>,
    pub cookie: Option<String>,
    pub last: Option<LastResponse>,
}

impl TaskCrudWorld {
    /// Creates a world with an empty board and no session.
    #[must_use]
    pub fn new() -> Self {
        let repo = Arc::new(InMemoryTaskRepository::new());
        let renderer = Arc::new(PageRenderer::new().expect("templates compile"));
        let state = AppState::new(
            Arc::clone(&repo),
            Arc::new(InMemorySessionStore::new()),
            renderer,
        );
        Self {
            router: build_router(state, AdminGate::open()),
            repo,
            cookie: None,
            last: None,
        }
    }

    /// Sends a GET request carrying the session cookie.
    pub fn get(&mut self, uri: &str) -> Result<(), eyre::Report> {
        let request = self
            .with_cookie(Request::builder().method("GET").uri(uri))
            .body(Body::empty())?;
        self.send(request)
    }

    /// Sends a form POST carrying the session cookie.
    pub fn post_form(&mut self, uri: &str, body: String) -> Result<(), eyre::Report> {
        let request = self
            .with_cookie(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded"),
            )
            .body(Body::from(body))?;
        self.send(request)
    }

    fn with_cookie(&self, builder: axum::http::request::Builder) -> axum::http::request::Builder {
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie.as_str()),
            None => builder,
        }
    }

    fn send(&mut self, request: Request<Body>) -> Result<(), eyre::Report> {
        let response = run_async(self.router.clone().oneshot(request))?;
        if let Some(issued) = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| raw.split(';').next())
        {
            self.cookie = Some(issued.to_owned());
        }
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = run_async(response.into_body().collect())?.to_bytes();
        self.last = Some(LastResponse {
            status,
            location,
            body: String::from_utf8(bytes.to_vec())?,
        });
        Ok(())
    }

    /// Returns the last response or fails the step.
    pub fn last(&self) -> Result<&LastResponse, eyre::Report> {
        self.last
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request has been made in this scenario"))
    }
}

impl Default for TaskCrudWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCrudWorld {
    TaskCrudWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Percent-encodes a form value.
pub fn encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                encoded.push(char::from(byte));
            }
            b' ' => encoded.push('+'),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

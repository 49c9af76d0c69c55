//! Error type for request handling.

use crate::session::SessionStoreError;
use crate::task::services::TaskWorkflowError;
use axum::http::StatusCode;
use axum::http::header::InvalidHeaderValue;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

const INTERNAL_ERROR_PAGE: &str = concat!(
    "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">",
    "<title>Server Error</title></head><body><h1>Something went wrong</h1>",
    "<p>The request could not be completed. Please try again later.</p>",
    "</body></html>",
);

/// Failures that end a request with a generic server error page.
#[derive(Debug, Error)]
pub enum WebError {
    /// A workflow action failed.
    #[error(transparent)]
    Workflow(#[from] TaskWorkflowError),

    /// Loading or saving the session failed.
    #[error(transparent)]
    Session(#[from] SessionStoreError),

    /// A page template failed to render.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    /// A response header could not be encoded.
    #[error("invalid response header: {0}")]
    Header(#[from] InvalidHeaderValue),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
    }
}

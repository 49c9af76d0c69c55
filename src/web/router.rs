//! Route table and shared handler state.

use super::{AdminGate, PageRenderer, handlers, require_admin};
use crate::session::SessionStore;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskWorkflowService;
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use std::sync::Arc;

/// Dependencies shared by every handler.
pub struct AppState<R, S>
where
    R: TaskRepository,
    S: SessionStore,
{
    /// Task workflow controller.
    pub workflow: TaskWorkflowService<R>,
    /// Session storage.
    pub sessions: Arc<S>,
    /// Page renderer.
    pub renderer: Arc<PageRenderer>,
}

impl<R, S> AppState<R, S>
where
    R: TaskRepository,
    S: SessionStore,
{
    /// Wires the workflow over `repository` with the given session store
    /// and renderer.
    #[must_use]
    pub const fn new(repository: Arc<R>, sessions: Arc<S>, renderer: Arc<PageRenderer>) -> Self {
        Self {
            workflow: TaskWorkflowService::new(repository),
            sessions,
            renderer,
        }
    }
}

impl<R, S> Clone for AppState<R, S>
where
    R: TaskRepository,
    S: SessionStore,
{
    fn clone(&self) -> Self {
        Self {
            workflow: self.workflow.clone(),
            sessions: Arc::clone(&self.sessions),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

/// Builds the task router with every route behind `gate`.
#[must_use]
pub fn build_router<R, S>(state: AppState<R, S>, gate: AdminGate) -> Router
where
    R: TaskRepository + 'static,
    S: SessionStore + 'static,
{
    Router::new()
        .route("/tasks", get(handlers::manage_first::<R, S>))
        .route("/tasks/manage", get(handlers::manage_first::<R, S>))
        .route("/tasks/manage/{page}", get(handlers::manage_page::<R, S>))
        .route("/tasks/create", get(handlers::create_new::<R, S>))
        .route("/tasks/create/{id}", get(handlers::create_existing::<R, S>))
        .route("/tasks/submit", post(handlers::submit_new::<R, S>))
        .route("/tasks/submit/{id}", post(handlers::submit_existing::<R, S>))
        .route("/tasks/show/{id}", get(handlers::show::<R, S>))
        .route("/tasks/delete_conf/{id}", get(handlers::delete_conf::<R, S>))
        .route(
            "/tasks/submit_delete/{id}",
            post(handlers::submit_delete::<R, S>),
        )
        .route(
            "/tasks/set_per_page/{option}",
            get(handlers::set_per_page::<R, S>),
        )
        .route_layer(from_fn_with_state(gate, require_admin))
        .with_state(state)
}

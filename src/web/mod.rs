//! HTTP surface for the task pages.
//!
//! The router maps each task route onto a workflow action. Handlers resolve
//! the session once per request, call the workflow, then render the
//! returned page or issue the redirect and write back session changes.

pub mod admin;
pub mod error;
mod handlers;
pub mod render;
mod router;
pub mod session;

pub use admin::{AdminGate, require_admin};
pub use error::WebError;
pub use render::PageRenderer;
pub use router::{AppState, build_router};
pub use session::{SESSION_COOKIE, SessionHandle};

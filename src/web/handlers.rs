//! Request handlers mapping routes onto workflow actions.

use super::{AppState, SessionHandle, WebError};
use crate::session::SessionStore;
use crate::task::domain::{PerPage, TaskId, parse_page_number};
use crate::task::form::{ConfirmationSubmission, TaskSubmission};
use crate::task::ports::TaskRepository;
use crate::task::services::{TaskWorkflowService, WorkflowOutcome};
use axum::Form;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect as HttpRedirect, Response};

type HandlerResult = Result<Response, WebError>;

pub async fn manage_first<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    list(&state, &headers, None).await
}

pub async fn manage_page<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
    Path(page): Path<String>,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    list(&state, &headers, Some(&page)).await
}

pub async fn create_new<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), &headers).await?;
    let outcome = state.workflow.create_form(None).await?;
    finish(&state, session, outcome).await
}

pub async fn create_existing<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), &headers).await?;
    let outcome = state
        .workflow
        .create_form(TaskId::from_path_segment(&id))
        .await?;
    finish(&state, session, outcome).await
}

pub async fn submit_new<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
    Form(submission): Form<TaskSubmission>,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), &headers).await?;
    let outcome = state.workflow.submit(None, &submission).await?;
    finish(&state, session, outcome).await
}

pub async fn submit_existing<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(submission): Form<TaskSubmission>,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), &headers).await?;
    let outcome = state
        .workflow
        .submit(TaskId::from_path_segment(&id), &submission)
        .await?;
    finish(&state, session, outcome).await
}

pub async fn show<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), &headers).await?;
    let outcome = state.workflow.show(TaskId::from_path_segment(&id)).await?;
    finish(&state, session, outcome).await
}

pub async fn delete_conf<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), &headers).await?;
    let outcome = state
        .workflow
        .delete_conf(TaskId::from_path_segment(&id))
        .await?;
    finish(&state, session, outcome).await
}

pub async fn submit_delete<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(submission): Form<ConfirmationSubmission>,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), &headers).await?;
    let outcome = state
        .workflow
        .submit_delete(TaskId::from_path_segment(&id), &submission)
        .await?;
    finish(&state, session, outcome).await
}

pub async fn set_per_page<R, S>(
    State(state): State<AppState<R, S>>,
    headers: HeaderMap,
    Path(option): Path<String>,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), &headers).await?;
    let outcome = TaskWorkflowService::<R>::set_per_page(PerPage::from_path_segment(&option));
    finish(&state, session, outcome).await
}

async fn list<R, S>(state: &AppState<R, S>, headers: &HeaderMap, page: Option<&str>) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let session = SessionHandle::open(state.sessions.as_ref(), headers).await?;
    let outcome = state
        .workflow
        .manage(&session.context(), parse_page_number(page))
        .await?;
    finish(state, session, outcome).await
}

async fn finish<R, S>(
    state: &AppState<R, S>,
    mut session: SessionHandle,
    outcome: WorkflowOutcome,
) -> HandlerResult
where
    R: TaskRepository,
    S: SessionStore,
{
    let mut response = match outcome {
        WorkflowOutcome::Render(page) => {
            let flash = session.take_flash();
            let body = state.renderer.render(&page, flash.as_deref())?;
            let status = if page.is_not_found() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (status, Html(body)).into_response()
        }
        WorkflowOutcome::Redirect(redirect) => {
            session.apply(&redirect);
            HttpRedirect::to(redirect.location()).into_response()
        }
    };
    session.close(state.sessions.as_ref(), &mut response).await?;
    Ok(response)
}

//! Workflow controller for the task pages.
//!
//! Each action reads from or writes to the repository and returns a
//! [`WorkflowOutcome`]: a page to render or a redirect. The controller never
//! touches the session; the caller resolves a [`RequestContext`] up front
//! and applies any session change carried by a [`Redirect`].

use crate::task::{
    domain::{PER_PAGE_OPTIONS, PageRequest, Pagination, PerPage, Task, TaskId},
    form::{
        ConfirmationSubmission, TaskDisplay, TaskFormValues, TaskSubmission, ValidationSummary,
        from_stored, from_submission, validate_submission,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// URL prefix of every task route.
pub const MODULE_PATH: &str = "/tasks";

/// Submit button label required to save a task.
pub const SUBMIT_TOKEN: &str = "Submit";

/// Submit button label required to delete a task.
pub const DELETE_TOKEN: &str = "Yes - Delete Now";

/// Flash message after a successful insert.
pub const FLASH_CREATED: &str = "The record was successfully created";

/// Flash message after a successful update.
pub const FLASH_UPDATED: &str = "The record was successfully updated";

/// Flash message after a successful delete.
pub const FLASH_DELETED: &str = "The record was successfully deleted";

const NOT_FOUND_MESSAGE: &str = "The record you requested could not be found.";

/// Returns the URL of a list page.
#[must_use]
pub fn manage_url(page: u64) -> String {
    if page <= 1 {
        return format!("{MODULE_PATH}/manage");
    }
    format!("{MODULE_PATH}/manage/{page}")
}

/// Returns the URL of a per-record action.
#[must_use]
pub fn task_url(action: &str, id: impl fmt::Display) -> String {
    format!("{MODULE_PATH}/{action}/{id}")
}

/// Per-request state resolved once from the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    per_page: PerPage,
}

impl RequestContext {
    /// Creates a context carrying the session's page-size preference.
    #[must_use]
    pub const fn new(per_page: PerPage) -> Self {
        Self { per_page }
    }

    /// Returns the page-size preference.
    #[must_use]
    pub const fn per_page(&self) -> PerPage {
        self.per_page
    }
}

/// A page-size choice offered on the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerPageOptionView {
    /// Rows per page.
    pub value: u64,
    /// URL selecting this option.
    pub url: String,
    /// Whether this is the active option.
    pub selected: bool,
}

/// A numbered page link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinkView {
    /// 1-based page number.
    pub number: u64,
    /// Link target.
    pub url: String,
    /// Whether this is the page being shown.
    pub current: bool,
}

/// Pagination controls for the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    /// Current 1-based page.
    pub current_page: u64,
    /// Number of pages.
    pub total_pages: u64,
    /// Number of stored records.
    pub total_rows: u64,
    /// Position of the first row shown, 0 for an empty page.
    pub showing_from: u64,
    /// Position of the last row shown, 0 for an empty page.
    pub showing_to: u64,
    /// Link to the previous page.
    pub previous_url: Option<String>,
    /// Link to the next page.
    pub next_url: Option<String>,
    /// Numbered links around the current page.
    pub pages: Vec<PageLinkView>,
}

impl From<Pagination> for PaginationView {
    fn from(pagination: Pagination) -> Self {
        let current_page = pagination.current_page();
        Self {
            current_page,
            total_pages: pagination.total_pages(),
            total_rows: pagination.total_rows(),
            showing_from: pagination.showing_from(),
            showing_to: pagination.showing_to(),
            previous_url: pagination.previous_page().map(manage_url),
            next_url: pagination.next_page().map(manage_url),
            pages: pagination
                .page_numbers()
                .into_iter()
                .map(|number| PageLinkView {
                    number,
                    url: manage_url(number),
                    current: number == current_page,
                })
                .collect(),
        }
    }
}

/// List page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManageView {
    /// Page headline.
    pub headline: &'static str,
    /// Link to the empty create form.
    pub create_url: String,
    /// Rows on the current page.
    pub rows: Vec<TaskDisplay>,
    /// Pagination controls.
    pub pagination: PaginationView,
    /// Page-size choices.
    pub per_page_options: Vec<PerPageOptionView>,
}

/// Create or edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Page headline.
    pub headline: &'static str,
    /// Identifier of the task being edited, if any.
    pub update_id: Option<i64>,
    /// Form `action` target.
    pub form_location: String,
    /// Cancel link target.
    pub cancel_url: String,
    /// Submit button label.
    pub submit_label: &'static str,
    /// Input values.
    pub values: TaskFormValues,
    /// Validation failures of the previous submission.
    pub errors: Option<ValidationSummary>,
}

/// Detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowView {
    /// Page headline.
    pub headline: &'static str,
    /// Displayed task.
    pub task: TaskDisplay,
    /// Link to the edit form.
    pub edit_url: String,
    /// Link to the delete confirmation.
    pub delete_url: String,
    /// Link back to the list.
    pub back_url: String,
}

/// Delete confirmation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmView {
    /// Page headline.
    pub headline: &'static str,
    /// Task about to be deleted.
    pub task: TaskDisplay,
    /// Form `action` target.
    pub form_location: String,
    /// Cancel link target.
    pub cancel_url: String,
    /// Label the confirm button must carry.
    pub confirm_label: &'static str,
}

/// Page shown for an unknown or zero identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    /// Page headline.
    pub headline: &'static str,
    /// Explanation shown to the user.
    pub message: &'static str,
    /// Link back to the list.
    pub back_url: String,
}

impl Default for NotFoundView {
    fn default() -> Self {
        Self {
            headline: "Record Not Found",
            message: NOT_FOUND_MESSAGE,
            back_url: manage_url(1),
        }
    }
}

/// A page selected by the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskPage {
    /// Paginated list.
    Manage(ManageView),
    /// Create or edit form.
    Form(FormView),
    /// Detail page.
    Show(ShowView),
    /// Delete confirmation.
    DeleteConfirm(DeleteConfirmView),
    /// Unknown record.
    NotFound(NotFoundView),
}

impl TaskPage {
    /// Returns the name of the template rendering this page.
    #[must_use]
    pub const fn template_name(&self) -> &'static str {
        match self {
            Self::Manage(_) => "manage.html",
            Self::Form(_) => "create.html",
            Self::Show(_) => "show.html",
            Self::DeleteConfirm(_) => "delete_conf.html",
            Self::NotFound(_) => "not_found.html",
        }
    }

    /// Returns `true` for the not-found page.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Redirect issued after a write or a rejected request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    location: String,
    flash: Option<&'static str>,
    per_page: Option<PerPage>,
}

impl Redirect {
    /// Redirects to `location` without session changes.
    #[must_use]
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            flash: None,
            per_page: None,
        }
    }

    /// Queues a flash message for the next rendered page.
    #[must_use]
    pub const fn with_flash(mut self, message: &'static str) -> Self {
        self.flash = Some(message);
        self
    }

    /// Stores a new page-size preference.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: PerPage) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Returns the redirect target.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the queued flash message, if any.
    #[must_use]
    pub const fn flash(&self) -> Option<&'static str> {
        self.flash
    }

    /// Returns the page-size preference to store, if any.
    #[must_use]
    pub const fn per_page(&self) -> Option<PerPage> {
        self.per_page
    }
}

/// Result of a workflow action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Render a page.
    Render(TaskPage),
    /// Redirect the browser.
    Redirect(Redirect),
}

/// Service-level errors for workflow actions.
#[derive(Debug, Error)]
pub enum TaskWorkflowError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for workflow actions.
pub type TaskWorkflowResult<T> = Result<T, TaskWorkflowError>;

/// Task workflow orchestration service.
pub struct TaskWorkflowService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskWorkflowService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskWorkflowService<R>
where
    R: TaskRepository,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Renders one page of the task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the count or page
    /// query fails.
    pub async fn manage(
        &self,
        context: &RequestContext,
        page: u64,
    ) -> TaskWorkflowResult<WorkflowOutcome> {
        let request = PageRequest::new(page, context.per_page());
        let total_rows = self.repository.count_all().await?;
        let tasks = self
            .repository
            .fetch_page(request.limit(), request.offset())
            .await?;
        debug!(
            page = request.page(),
            limit = request.limit(),
            total_rows,
            "listing tasks"
        );

        let view = ManageView {
            headline: "Manage Tasks",
            create_url: format!("{MODULE_PATH}/create"),
            rows: tasks.iter().map(from_stored).collect(),
            pagination: Pagination::new(request, total_rows).into(),
            per_page_options: per_page_options(context.per_page()),
        };
        Ok(WorkflowOutcome::Render(TaskPage::Manage(view)))
    }

    /// Renders the create form, or the edit form for an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the lookup fails.
    pub async fn create_form(&self, id: Option<TaskId>) -> TaskWorkflowResult<WorkflowOutcome> {
        let Some(task_id) = id else {
            return Ok(render_form(None, TaskFormValues::defaults(), None));
        };
        let outcome = match self.repository.find_by_id(task_id).await? {
            Some(task) => render_form(Some(task_id), TaskFormValues::from_stored(&task), None),
            None => render_not_found(),
        };
        Ok(outcome)
    }

    /// Validates and saves a form submission.
    ///
    /// A submission without the exact [`SUBMIT_TOKEN`] is ignored and
    /// redirects to the list. A failing submission re-renders the form with
    /// the typed values and messages. Otherwise the task is inserted (no id)
    /// or updated (id) and the browser is sent to its detail page. An id
    /// that does not resolve renders the not-found page whatever the input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the write fails for a
    /// reason other than a missing record.
    pub async fn submit(
        &self,
        id: Option<TaskId>,
        submission: &TaskSubmission,
    ) -> TaskWorkflowResult<WorkflowOutcome> {
        if !submission.confirms(SUBMIT_TOKEN) {
            debug!("ignoring task submission without submit token");
            return Ok(WorkflowOutcome::Redirect(Redirect::to(manage_url(1))));
        }

        if let Some(task_id) = id
            && self.repository.find_by_id(task_id).await?.is_none()
        {
            debug!(%task_id, "submission for missing task");
            return Ok(render_not_found());
        }

        if let Err(errors) = validate_submission(submission) {
            debug!(error_count = errors.errors().len(), "task submission rejected");
            return Ok(render_form(
                id,
                TaskFormValues::from_submission(submission),
                Some(ValidationSummary::from(&errors)),
            ));
        }

        let record = from_submission(submission);
        let Some(task_id) = id else {
            let new_id = self.repository.insert(&record).await?;
            info!(task_id = %new_id, "task created");
            return Ok(WorkflowOutcome::Redirect(
                Redirect::to(task_url("show", new_id)).with_flash(FLASH_CREATED),
            ));
        };

        match self.repository.update(task_id, &record).await {
            Ok(()) => {
                info!(%task_id, "task updated");
                Ok(WorkflowOutcome::Redirect(
                    Redirect::to(task_url("show", task_id)).with_flash(FLASH_UPDATED),
                ))
            }
            Err(TaskRepositoryError::NotFound(_)) => Ok(render_not_found()),
            Err(err) => Err(err.into()),
        }
    }

    /// Renders the detail page of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the lookup fails.
    pub async fn show(&self, id: Option<TaskId>) -> TaskWorkflowResult<WorkflowOutcome> {
        let Some(task) = self.find(id).await? else {
            return Ok(render_not_found());
        };
        let task_id = task.id();
        let view = ShowView {
            headline: "Task Information",
            task: from_stored(&task),
            edit_url: task_url("create", task_id),
            delete_url: task_url("delete_conf", task_id),
            back_url: manage_url(1),
        };
        Ok(WorkflowOutcome::Render(TaskPage::Show(view)))
    }

    /// Renders the delete confirmation page.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the lookup fails.
    pub async fn delete_conf(&self, id: Option<TaskId>) -> TaskWorkflowResult<WorkflowOutcome> {
        let Some(task) = self.find(id).await? else {
            return Ok(render_not_found());
        };
        let task_id = task.id();
        let view = DeleteConfirmView {
            headline: "Delete Task",
            task: from_stored(&task),
            form_location: task_url("submit_delete", task_id),
            cancel_url: task_url("show", task_id),
            confirm_label: DELETE_TOKEN,
        };
        Ok(WorkflowOutcome::Render(TaskPage::DeleteConfirm(view)))
    }

    /// Deletes a task after confirmation.
    ///
    /// Without the exact [`DELETE_TOKEN`], or for an unknown id, nothing is
    /// deleted and the browser returns to the list without a message.
    ///
    /// # Errors
    ///
    /// Returns [`TaskWorkflowError::Repository`] when the delete fails for a
    /// reason other than a missing record.
    pub async fn submit_delete(
        &self,
        id: Option<TaskId>,
        submission: &ConfirmationSubmission,
    ) -> TaskWorkflowResult<WorkflowOutcome> {
        let list = Redirect::to(manage_url(1));
        let Some(task_id) = id.filter(|_| submission.confirms(DELETE_TOKEN)) else {
            debug!("ignoring unconfirmed task deletion");
            return Ok(WorkflowOutcome::Redirect(list));
        };

        match self.repository.delete(task_id).await {
            Ok(()) => {
                info!(%task_id, "task deleted");
                Ok(WorkflowOutcome::Redirect(list.with_flash(FLASH_DELETED)))
            }
            Err(TaskRepositoryError::NotFound(_)) => {
                debug!(%task_id, "delete requested for missing task");
                Ok(WorkflowOutcome::Redirect(list))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Stores a page-size choice and returns to the list.
    #[must_use]
    pub fn set_per_page(per_page: PerPage) -> WorkflowOutcome {
        debug!(limit = per_page.limit(), "page size selected");
        WorkflowOutcome::Redirect(Redirect::to(manage_url(1)).with_per_page(per_page))
    }

    async fn find(&self, id: Option<TaskId>) -> TaskWorkflowResult<Option<Task>> {
        let Some(task_id) = id else {
            return Ok(None);
        };
        Ok(self.repository.find_by_id(task_id).await?)
    }
}

fn per_page_options(selected: PerPage) -> Vec<PerPageOptionView> {
    PER_PAGE_OPTIONS
        .iter()
        .enumerate()
        .map(|(index, value)| PerPageOptionView {
            value: *value,
            url: task_url("set_per_page", index),
            selected: index == selected.index(),
        })
        .collect()
}

fn render_form(
    id: Option<TaskId>,
    values: TaskFormValues,
    errors: Option<ValidationSummary>,
) -> WorkflowOutcome {
    let view = match id {
        Some(task_id) => FormView {
            headline: "Update Task Details",
            update_id: Some(task_id.value()),
            form_location: task_url("submit", task_id),
            cancel_url: task_url("show", task_id),
            submit_label: SUBMIT_TOKEN,
            values,
            errors,
        },
        None => FormView {
            headline: "Create New Task Record",
            update_id: None,
            form_location: format!("{MODULE_PATH}/submit"),
            cancel_url: manage_url(1),
            submit_label: SUBMIT_TOKEN,
            values,
            errors,
        },
    };
    WorkflowOutcome::Render(TaskPage::Form(view))
}

fn render_not_found() -> WorkflowOutcome {
    WorkflowOutcome::Render(TaskPage::NotFound(NotFoundView::default()))
}

//! Application services for the task CRUD workflow.

mod workflow;

pub use workflow::{
    DELETE_TOKEN, DeleteConfirmView, FLASH_CREATED, FLASH_DELETED, FLASH_UPDATED, FormView,
    MODULE_PATH, ManageView, NotFoundView, PageLinkView, PaginationView, PerPageOptionView,
    Redirect, RequestContext, SUBMIT_TOKEN, ShowView, TaskPage, TaskWorkflowError,
    TaskWorkflowResult, TaskWorkflowService, WorkflowOutcome, manage_url, task_url,
};

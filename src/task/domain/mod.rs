//! Domain model for the task CRUD module.
//!
//! A task is a single stored record with a title, a description and a
//! completion flag. The domain keeps the storage encoding of the flag and
//! the pagination arithmetic explicit so that adapters and the web surface
//! never rely on implicit coercion.

mod completion;
mod error;
mod ids;
mod pagination;
mod task;

pub use completion::CompletionFlag;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use pagination::{
    DEFAULT_PER_PAGE_INDEX, PER_PAGE_OPTIONS, PageRequest, Pagination, PerPage,
    parse_page_number,
};
pub use task::{Task, TaskRecord};

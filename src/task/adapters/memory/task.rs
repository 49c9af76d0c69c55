//! In-memory implementation of the task repository port.

use crate::task::{
    domain::{CompletionFlag, Task, TaskDomainError, TaskId, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory task repository.
///
/// Rows are kept in their stored shape (integer completion flag) so the
/// same boundary conversion applies as for the database adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    rows: BTreeMap<TaskId, StoredTask>,
    last_id: i64,
}

#[derive(Debug, Clone)]
struct StoredTask {
    task_title: String,
    task_description: String,
    complete: i16,
}

impl StoredTask {
    fn from_record(record: &TaskRecord) -> Self {
        Self {
            task_title: record.task_title.clone(),
            task_description: record.task_description.clone(),
            complete: CompletionFlag::to_stored(record.complete),
        }
    }

    fn to_task(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let complete =
            CompletionFlag::from_stored(self.complete).map_err(TaskRepositoryError::persistence)?;
        let record = TaskRecord::new(
            self.task_title.clone(),
            self.task_description.clone(),
            complete,
        );
        Ok(Task::from_persisted(id, record))
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: &impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn fetch_page(&self, limit: u64, offset: u64) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        state
            .rows
            .iter()
            .skip(to_usize(offset))
            .take(to_usize(limit))
            .map(|(id, row)| row.to_task(*id))
            .collect()
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        state.rows.get(&id).map(|row| row.to_task(id)).transpose()
    }

    async fn count_all(&self) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        u64::try_from(state.rows.len()).map_err(TaskRepositoryError::persistence)
    }

    async fn insert(&self, record: &TaskRecord) -> TaskRepositoryResult<TaskId> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let next_value = state
            .last_id
            .checked_add(1)
            .ok_or(TaskDomainError::TaskIdsExhausted {
                last_assigned: state.last_id,
            })
            .map_err(TaskRepositoryError::persistence)?;
        let id = TaskId::new(next_value).map_err(TaskRepositoryError::persistence)?;

        state.last_id = next_value;
        state.rows.insert(id, StoredTask::from_record(record));
        Ok(id)
    }

    async fn update(&self, id: TaskId, record: &TaskRecord) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let row = state
            .rows
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        *row = StoredTask::from_record(record);
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}

//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{CompletionFlag, Task, TaskId, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the `tasks` table when it does not exist yet.
const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-18-000000_create_tasks/up.sql");

/// Creates the `tasks` table if it is missing.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when no connection can be
/// obtained or the statement fails.
pub async fn apply_schema(pool: &TaskPgPool) -> TaskRepositoryResult<()> {
    let schema_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = schema_pool.get().map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(CREATE_TASKS_SQL)
            .map_err(TaskRepositoryError::persistence)
    })
    .await
    .map_err(TaskRepositoryError::persistence)?
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn fetch_page(&self, limit: u64, offset: u64) -> TaskRepositoryResult<Vec<Task>> {
        let sql_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let sql_offset = i64::try_from(offset).unwrap_or(i64::MAX);
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .limit(sql_limit)
                .offset(sql_offset)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn count_all(&self) -> TaskRepositoryResult<u64> {
        self.run_blocking(|connection| {
            let count = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn insert(&self, record: &TaskRecord) -> TaskRepositoryResult<TaskId> {
        let changes = to_changeset(record);
        self.run_blocking(move |connection| {
            let id = diesel::insert_into(tasks::table)
                .values(&changes)
                .returning(tasks::id)
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            TaskId::new(id).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn update(&self, id: TaskId, record: &TaskRecord) -> TaskRepositoryResult<()> {
        let changes = to_changeset(record);
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.value())))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.value())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_changeset(record: &TaskRecord) -> TaskChangeset {
    TaskChangeset {
        task_title: record.task_title.clone(),
        task_description: record.task_description.clone(),
        complete: CompletionFlag::to_stored(record.complete),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        task_title,
        task_description,
        complete: persisted_complete,
    } = row;

    let task_id = TaskId::new(id).map_err(TaskRepositoryError::persistence)?;
    let complete =
        CompletionFlag::from_stored(persisted_complete).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::from_persisted(
        task_id,
        TaskRecord::new(task_title, task_description, complete),
    ))
}

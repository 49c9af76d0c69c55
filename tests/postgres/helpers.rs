//! Shared helpers for `PostgreSQL` integration tests.
//!
//! Tests run only when `TASKBOARD_TEST_DATABASE_URL` points at a server the
//! test user may create databases on. Each test gets its own temporary
//! database, dropped again when the fixture goes out of scope.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use rstest::fixture;
use taskboard::task::adapters::postgres::{PostgresTaskRepository, TaskPgPool, apply_schema};
use uuid::Uuid;

/// Environment variable naming the administrative connection URL.
pub const TEST_DATABASE_URL_ENV: &str = "TASKBOARD_TEST_DATABASE_URL";

/// A temporary database with the `tasks` table applied.
pub struct TestDatabase {
    admin_url: String,
    db_name: String,
    pool: TaskPgPool,
}

impl TestDatabase {
    /// Returns a repository over the temporary database.
    pub fn repository(&self) -> PostgresTaskRepository {
        PostgresTaskRepository::new(self.pool.clone())
    }

    /// Returns the pool of the temporary database.
    pub const fn pool(&self) -> &TaskPgPool {
        &self.pool
    }

    /// Runs raw SQL against the temporary database.
    pub fn execute(&self, sql: &str) {
        let mut connection = self.pool.get().expect("pooled connection");
        connection.batch_execute(sql).expect("raw SQL succeeds");
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        let Ok(mut admin) = PgConnection::establish(&self.admin_url) else {
            return;
        };
        admin
            .batch_execute(&format!(
                "DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)",
                self.db_name
            ))
            .ok();
    }
}

/// Replaces the database name in a connection URL.
pub fn with_database(url: &str, db_name: &str) -> String {
    let (base, query) = url.split_once('?').map_or((url, None), |(b, q)| (b, Some(q)));
    let prefix = base.rsplit_once('/').map_or(base, |(prefix, _)| prefix);
    query.map_or_else(
        || format!("{prefix}/{db_name}"),
        |params| format!("{prefix}/{db_name}?{params}"),
    )
}

/// Creates a fresh database, or `None` when no test server is configured.
#[fixture]
pub fn test_db() -> Option<TestDatabase> {
    let admin_url = std::env::var(TEST_DATABASE_URL_ENV).ok()?;
    let db_name = format!("taskboard_test_{}", Uuid::new_v4().simple());

    let mut admin = PgConnection::establish(&admin_url).expect("connect to test server");
    admin
        .batch_execute(&format!("CREATE DATABASE \"{db_name}\""))
        .expect("create temporary database");

    let manager = ConnectionManager::<PgConnection>::new(with_database(&admin_url, &db_name));
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("pool for temporary database");

    Some(TestDatabase {
        admin_url,
        db_name,
        pool,
    })
}

/// Applies the schema to a temporary database.
pub async fn prepared(db: &TestDatabase) -> PostgresTaskRepository {
    apply_schema(db.pool()).await.expect("schema applies");
    db.repository()
}

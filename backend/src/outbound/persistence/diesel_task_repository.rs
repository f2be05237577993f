//! PostgreSQL-backed `TaskRepository` implementation using Diesel ORM.
//!
//! Every port method issues exactly one statement. Point lookups and updates
//! that match no row report [`TaskRepositoryError::NotFound`]; deletes that
//! match no row succeed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{Task, TaskDraft, TaskId, TaskName};

use super::models::{NewTaskRow, TaskRow, TaskUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::tasks;

/// Diesel-backed implementation of the `TaskRepository` port.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a new repository with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TaskRepositoryError {
    TaskRepositoryError::connection(error.into_message())
}

/// Map Diesel errors to task repository errors.
///
/// The driver message is carried through unchanged.
fn map_diesel_error(error: diesel::result::Error) -> TaskRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => TaskRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            TaskRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => TaskRepositoryError::query(info.message()),
        other => TaskRepositoryError::query(other.to_string()),
    }
}

/// Convert a database row into a domain task.
///
/// Rows written by this adapter always satisfy the domain invariants; a
/// failure here means the table was modified out of band.
fn row_to_task(row: TaskRow) -> Result<Task, TaskRepositoryError> {
    let TaskRow { id, name, done } = row;
    let task_id = TaskId::new(id)
        .map_err(|err| TaskRepositoryError::query(format!("invalid task row {id}: {err}")))?;
    let task_name = TaskName::new(name)
        .map_err(|err| TaskRepositoryError::query(format!("invalid task row {id}: {err}")))?;
    Ok(Task::new(task_id, task_name, done))
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn create(&self, draft: &TaskDraft) -> Result<Task, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTaskRow {
            name: draft.name().as_str(),
            done: draft.done(),
        };

        let row: TaskRow = diesel::insert_into(tasks::table)
            .values(&new_row)
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_task(row)
    }

    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TaskRow> = tasks::table
            .order(tasks::id.asc())
            .select(TaskRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_task).collect()
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Task, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TaskRow> = tasks::table
            .find(id.as_i64())
            .select(TaskRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.ok_or_else(|| TaskRepositoryError::not_found(id))
            .and_then(row_to_task)
    }

    async fn update(&self, task: &Task) -> Result<Task, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = TaskUpdate {
            name: task.name().as_str(),
            done: task.done(),
        };

        let row: Option<TaskRow> = diesel::update(tasks::table.find(task.id().as_i64()))
            .set(&changes)
            .returning(TaskRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.ok_or_else(|| TaskRepositoryError::not_found(task.id()))
            .and_then(row_to_task)
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(tasks::table.find(id.as_i64()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(task_id = %id, deleted, "task delete executed");
        Ok(())
    }
}

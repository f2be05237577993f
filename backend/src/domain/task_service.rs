//! Task domain service.
//!
//! Implements the [`TaskService`] driving port by forwarding each call to a
//! [`TaskRepository`]. The only work done here is classifying repository
//! failures into the domain error taxonomy.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{TaskRepository, TaskRepositoryError, TaskService};
use crate::domain::{Error, Task, TaskDraft, TaskId};

/// Message returned whenever a task lookup finds no row.
pub const TASK_NOT_FOUND_MESSAGE: &str = "Task not found";

fn map_repository_error(error: TaskRepositoryError) -> Error {
    match error {
        TaskRepositoryError::NotFound { .. } => Error::not_found(TASK_NOT_FOUND_MESSAGE),
        TaskRepositoryError::Connection { .. } | TaskRepositoryError::Query { .. } => {
            Error::internal(error.to_string())
        }
    }
}

/// Task service backed by a persistence gateway.
#[derive(Clone)]
pub struct TaskServiceImpl<R> {
    task_repo: Arc<R>,
}

impl<R> TaskServiceImpl<R> {
    /// Create a new service over the given repository.
    pub const fn new(task_repo: Arc<R>) -> Self {
        Self { task_repo }
    }
}

#[async_trait]
impl<R> TaskService for TaskServiceImpl<R>
where
    R: TaskRepository,
{
    async fn create_task(&self, draft: TaskDraft) -> Result<Task, Error> {
        self.task_repo
            .create(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, Error> {
        self.task_repo.list().await.map_err(map_repository_error)
    }

    async fn get_task(&self, id: TaskId) -> Result<Task, Error> {
        self.task_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn update_task(&self, task: Task) -> Result<Task, Error> {
        self.task_repo
            .update(&task)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), Error> {
        self.task_repo
            .delete(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;

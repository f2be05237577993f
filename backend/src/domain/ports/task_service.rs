//! Driving port for task use-cases consumed by inbound adapters.

use async_trait::async_trait;

use crate::domain::{Error, Task, TaskDraft, TaskId};

/// Task use-cases exposed to the HTTP layer.
///
/// Implementations return domain [`Error`] values so adapters can map them
/// to transport responses without inspecting persistence details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Store a new task.
    async fn create_task(&self, draft: TaskDraft) -> Result<Task, Error>;

    /// List every stored task.
    async fn list_tasks(&self) -> Result<Vec<Task>, Error>;

    /// Fetch a single task.
    async fn get_task(&self, id: TaskId) -> Result<Task, Error>;

    /// Replace the name and completion flag of an existing task.
    async fn update_task(&self, task: Task) -> Result<Task, Error>;

    /// Remove a task. Removing an absent task succeeds.
    async fn delete_task(&self, id: TaskId) -> Result<(), Error>;
}

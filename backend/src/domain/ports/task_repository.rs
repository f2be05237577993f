//! Port abstraction for task persistence adapters and their errors.
//!
//! Each method performs exactly one store operation. Absence of a row on a
//! point lookup or update is reported with the tagged
//! [`TaskRepositoryError::NotFound`] variant; deleting an absent row is not
//! an error.

use async_trait::async_trait;

use crate::domain::{Task, TaskDraft, TaskId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by task repository adapters.
    pub enum TaskRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "task repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "task repository query failed: {message}",
        /// No row matched the requested identifier.
        NotFound { id: TaskId } => "record not found: task {id}",
    }
}

/// Persistence gateway for tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new row and return it with the store-assigned identifier.
    async fn create(&self, draft: &TaskDraft) -> Result<Task, TaskRepositoryError>;

    /// Fetch every stored task, ordered by identifier.
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Fetch the task with the given identifier.
    async fn find_by_id(&self, id: TaskId) -> Result<Task, TaskRepositoryError>;

    /// Overwrite the name and completion flag of an existing task.
    async fn update(&self, task: &Task) -> Result<Task, TaskRepositoryError>;

    /// Remove the task with the given identifier if it exists.
    async fn delete(&self, id: TaskId) -> Result<(), TaskRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn not_found_mentions_the_identifier() {
        let id = TaskId::new(12).expect("valid id");
        let err = TaskRepositoryError::not_found(id);
        assert_eq!(err.to_string(), "record not found: task 12");
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = TaskRepositoryError::query("database error");
        assert_eq!(
            err.to_string(),
            "task repository query failed: database error"
        );
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = TaskRepositoryError::connection("refused");
        assert!(err.to_string().contains("connection failed: refused"));
    }
}

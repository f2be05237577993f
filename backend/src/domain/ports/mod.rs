//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod task_repository;
mod task_service;

#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{TaskRepository, TaskRepositoryError};
#[cfg(test)]
pub use task_service::MockTaskService;
pub use task_service::TaskService;

//! Domain primitives, services, and ports.
//!
//! Purpose: define the task entity, its validation rules, and the
//! transport-agnostic error taxonomy shared by inbound and outbound
//! adapters.
//!
//! Public surface:
//! - Error / ErrorCode: failure category and client-facing message.
//! - Task, TaskDraft, TaskId, TaskName: the task entity and its parts.
//! - TaskServiceImpl: the [`ports::TaskService`] implementation over a
//!   [`ports::TaskRepository`].

pub mod error;
pub mod ports;
pub mod task;
pub mod task_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::task::{Task, TaskDraft, TaskId, TaskName, TaskValidationError};
pub use self::task_service::{TASK_NOT_FOUND_MESSAGE, TaskServiceImpl};

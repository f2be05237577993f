//! Task data model.
//!
//! A task is the only entity managed by the service: a store-assigned
//! identifier, a required name, and a completion flag.

use std::fmt;
use std::str::FromStr;

/// Validation errors returned by the task constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskValidationError {
    /// The identifier was unparseable, zero, negative, or out of range.
    #[error("task id must be a positive integer")]
    InvalidId,
    /// The name was missing, empty, or only whitespace.
    #[error("name is required")]
    EmptyName,
}

/// Store-assigned task identifier.
///
/// ## Invariants
/// - Always strictly positive and representable as a PostgreSQL `BIGINT`.
///
/// # Examples
/// ```
/// use backend::domain::TaskId;
///
/// let id: TaskId = "42".parse().expect("valid id");
/// assert_eq!(id.get(), 42);
/// assert!("0".parse::<TaskId>().is_err());
/// assert!("-1".parse::<TaskId>().is_err());
/// assert!("abc".parse::<TaskId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(i64);

impl TaskId {
    /// Validate and construct an identifier from its storage representation.
    pub const fn new(value: i64) -> Result<Self, TaskValidationError> {
        if value <= 0 {
            return Err(TaskValidationError::InvalidId);
        }
        Ok(Self(value))
    }

    /// Identifier as an unsigned integer, the shape exposed over HTTP.
    pub const fn get(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Identifier in its storage representation.
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl TryFrom<u64> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let signed = i64::try_from(value).map_err(|_| TaskValidationError::InvalidId)?;
        Self::new(signed)
    }
}

impl FromStr for TaskId {
    type Err = TaskValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i64>()
            .map_err(|_| TaskValidationError::InvalidId)?;
        Self::new(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable task name.
///
/// ## Invariants
/// - Contains at least one non-whitespace character. The value is stored as
///   supplied, without trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskName(String);

impl TaskName {
    /// Validate and construct a task name.
    pub fn new(name: impl Into<String>) -> Result<Self, TaskValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<TaskName> for String {
    fn from(value: TaskName) -> Self {
        value.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated payload for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    name: TaskName,
    done: bool,
}

impl TaskDraft {
    /// Build a draft from validated parts.
    pub const fn new(name: TaskName, done: bool) -> Self {
        Self { name, done }
    }

    /// Task name.
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Completion flag.
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Attach a store-assigned identifier.
    pub fn into_task(self, id: TaskId) -> Task {
        Task::new(id, self.name, self.done)
    }
}

/// A persisted task.
///
/// # Examples
/// ```
/// use backend::domain::{Task, TaskId, TaskName};
///
/// let task = Task::new(
///     TaskId::new(1).expect("valid id"),
///     TaskName::new("Buy milk").expect("valid name"),
///     false,
/// );
/// assert_eq!(task.name().as_str(), "Buy milk");
/// assert!(!task.done());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    done: bool,
}

impl Task {
    /// Assemble a task from validated parts.
    pub const fn new(id: TaskId, name: TaskName, done: bool) -> Self {
        Self { id, name, done }
    }

    /// Store-assigned identifier.
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Task name.
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Completion flag.
    pub const fn done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests;

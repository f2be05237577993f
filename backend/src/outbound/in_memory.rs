//! In-process task store.
//!
//! Backs the service when no database is configured and serves as the
//! reference fake for handler and behaviour tests. Identifiers are assigned
//! from a monotonically increasing counter and never reused, matching a
//! `BIGSERIAL` column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{Task, TaskDraft, TaskId};

#[derive(Debug)]
struct Store {
    next_id: i64,
    rows: BTreeMap<TaskId, Task>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Mutex-guarded task map implementing [`TaskRepository`].
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    store: Mutex<Store>,
}

impl InMemoryTaskRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, TaskRepositoryError> {
        self.store
            .lock()
            .map_err(|_| TaskRepositoryError::connection("task store lock poisoned"))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, draft: &TaskDraft) -> Result<Task, TaskRepositoryError> {
        let mut store = self.lock()?;
        let id = TaskId::new(store.next_id)
            .map_err(|err| TaskRepositoryError::query(err.to_string()))?;
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| TaskRepositoryError::query("task id sequence exhausted"))?;

        let task = draft.clone().into_task(id);
        store.rows.insert(id, task.clone());
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        let store = self.lock()?;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Task, TaskRepositoryError> {
        let store = self.lock()?;
        store
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| TaskRepositoryError::not_found(id))
    }

    async fn update(&self, task: &Task) -> Result<Task, TaskRepositoryError> {
        let mut store = self.lock()?;
        let slot = store
            .rows
            .get_mut(&task.id())
            .ok_or_else(|| TaskRepositoryError::not_found(task.id()))?;
        *slot = task.clone();
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskRepositoryError> {
        let mut store = self.lock()?;
        store.rows.remove(&id);
        Ok(())
    }
}

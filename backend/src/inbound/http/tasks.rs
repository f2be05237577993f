//! Task HTTP handlers.
//!
//! ```text
//! POST   /tasks
//! GET    /tasks
//! GET    /tasks/{id}
//! PUT    /tasks/{id}
//! DELETE /tasks/{id}
//! ```
//!
//! Request bodies are decoded from raw bytes so malformed JSON surfaces as a
//! plain-text 400 through the domain error mapping rather than the framework's
//! default extractor error.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Task, TaskDraft, TaskId, TaskName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Message returned for unparseable or non-positive path identifiers.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID";

/// Request payload for creating or replacing a task.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct TaskRequestBody {
    /// Required; blank names are rejected.
    #[serde(default)]
    #[schema(example = "Buy milk")]
    pub name: String,
    /// Defaults to `false` when omitted.
    #[serde(default)]
    pub done: bool,
}

/// Task representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct TaskBody {
    /// Store-assigned identifier.
    #[schema(minimum = 1)]
    pub id: u64,
    /// Task name.
    pub name: String,
    /// Whether the task is complete.
    pub done: bool,
}

impl From<Task> for TaskBody {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().get(),
            name: task.name().to_string(),
            done: task.done(),
        }
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, Error> {
    raw.parse::<TaskId>()
        .map_err(|_| Error::invalid_request(INVALID_ID_MESSAGE))
}

fn parse_task_body(body: &[u8]) -> Result<TaskDraft, Error> {
    let payload: TaskRequestBody = serde_json::from_slice(body)
        .map_err(|err| Error::invalid_request(format!("invalid JSON body: {err}")))?;
    let name = TaskName::new(payload.name).map_err(|err| Error::invalid_request(err.to_string()))?;
    Ok(TaskDraft::new(name, payload.done))
}

/// Create a task.
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = TaskRequestBody,
    responses(
        (status = 200, description = "Task created", body = TaskBody),
        (status = 400, description = "Malformed body or missing name", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
#[post("/tasks")]
pub async fn create_task(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<TaskBody>> {
    let draft = parse_task_body(&body)?;
    let task = state.tasks.create_task(draft).await?;
    Ok(web::Json(TaskBody::from(task)))
}

/// List every task in ascending id order.
#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "All tasks", body = [TaskBody]),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
#[get("/tasks")]
pub async fn list_tasks(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TaskBody>>> {
    let tasks = state.tasks.list_tasks().await?;
    Ok(web::Json(tasks.into_iter().map(TaskBody::from).collect()))
}

/// Fetch a single task.
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(("id" = u64, Path, description = "Positive task identifier")),
    responses(
        (status = 200, description = "Task found", body = TaskBody),
        (status = 400, description = "Invalid ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tags = ["tasks"],
    operation_id = "getTask"
)]
#[get("/tasks/{id}")]
pub async fn get_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TaskBody>> {
    let id = parse_task_id(&path)?;
    let task = state.tasks.get_task(id).await?;
    Ok(web::Json(TaskBody::from(task)))
}

/// Replace the name and completion flag of an existing task.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = u64, Path, description = "Positive task identifier")),
    request_body = TaskRequestBody,
    responses(
        (status = 200, description = "Task updated", body = TaskBody),
        (status = 400, description = "Invalid ID, malformed body or missing name", body = String, content_type = "text/plain"),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
#[put("/tasks/{id}")]
pub async fn update_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<TaskBody>> {
    let id = parse_task_id(&path)?;
    let task = parse_task_body(&body)?.into_task(id);
    let updated = state.tasks.update_task(task).await?;
    Ok(web::Json(TaskBody::from(updated)))
}

/// Delete a task. Deleting an absent task still succeeds.
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = u64, Path, description = "Positive task identifier")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Invalid ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
#[delete("/tasks/{id}")]
pub async fn delete_task(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_task_id(&path)?;
    state.tasks.delete_task(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;

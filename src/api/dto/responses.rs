//! Response DTOs for the task API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::task::Task;

/// Wire representation of a task record.
///
/// The conversion from [`Task`] is the serialization boundary where the
/// internal identifier is exposed under the field name `id` and field
/// names switch to camelCase. `description` is omitted entirely when the
/// record has none.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": "0198c5e2-3c0a-7b11-8c5a-0f6d2f9f3a10",
///     "title": "Buy milk",
///     "completed": false,
///     "createdAt": "2026-08-07T09:10:11Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// The record identifier, in canonical UUID form.
    pub id: String,
    /// Title of the task.
    pub title: String,
    /// Detail text, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Creation instant, RFC 3339.
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

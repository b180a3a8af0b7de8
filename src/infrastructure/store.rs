//! Task store abstraction and its backends.
//!
//! The [`TaskStore`] trait defines the five store-facing primitives the
//! application layer is built on. Two implementations are provided:
//!
//! - [`SqliteTaskStore`]: the production backend over an explicit
//!   `sqlx::SqlitePool` handle
//! - [`InMemoryTaskStore`]: a `HashMap`-backed twin used by tests
//!
//! Identifier handling: every primitive that takes an identifier accepts it
//! as a raw string. A string that does not parse as a [`TaskId`] is treated
//! as "no such record" (an absent result), never as a failure.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::domain::task::{NewTask, Task, TaskPatch};
use crate::domain::value_objects::{InvalidTaskId, TaskId};

/// Errors that can occur when interacting with the task store.
///
/// These represent the unexpected-failure class: they are not handled by
/// any handler and surface to the caller as a generic failure response.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// A database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// A stored row carried an identifier that does not parse.
    #[error("{0}")]
    CorruptIdentifier(#[from] InvalidTaskId),
    /// The in-memory store lock was poisoned by a panicking writer.
    #[error("task store lock poisoned")]
    LockPoisoned,
}

/// Store-facing primitives used by the application layer.
///
/// Implementations must be thread-safe; every call is a single,
/// independent, non-transactional round trip to the backend.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a new record, assigning its identifier and creation
    /// timestamp, and returns the persisted record.
    async fn insert(&self, new_task: NewTask) -> Result<Task, TaskStoreError>;

    /// Returns all records matching the optional `completed` equality
    /// filter; no filter returns every record. Ordering is backend-defined.
    async fn find_many(&self, completed: Option<bool>) -> Result<Vec<Task>, TaskStoreError>;

    /// Returns the record with the given identifier, or `None` if the
    /// identifier is malformed or unknown.
    async fn find_one(&self, id: &str) -> Result<Option<Task>, TaskStoreError>;

    /// Merges the present fields of `patch` into the record and returns the
    /// updated record, or `None` if the identifier is malformed or unknown.
    async fn update_one(
        &self,
        id: &str,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskStoreError>;

    /// Removes the record with the given identifier; returns whether a
    /// record was actually removed.
    async fn delete_one(&self, id: &str) -> Result<bool, TaskStoreError>;
}

// =============================================================================
// SQLite backend
// =============================================================================

const CREATE_TASKS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
)";

const SELECT_TASK_COLUMNS: &str =
    "SELECT id, title, description, completed, created_at FROM tasks";

/// SQLite-backed task store.
///
/// Holds the connection pool it was given at construction; nothing in this
/// module reaches for ambient connection state. The pool is created once at
/// startup and startup aborts if the store cannot be reached.
#[derive(Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

/// Row shape shared by every query in this backend.
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: String,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Result<Task, TaskStoreError> {
        Ok(Task {
            id: TaskId::parse(&self.id)?,
            title: self.title,
            description: self.description,
            completed: self.completed,
            created_at: self.created_at,
        })
    }
}

impl SqliteTaskStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `tasks` table if it does not exist yet.
    ///
    /// Called once at startup; a failure here is fatal to the process.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Database`] if the statement fails.
    pub async fn init_schema(&self) -> Result<(), TaskStoreError> {
        sqlx::query(CREATE_TASKS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn insert(&self, new_task: NewTask) -> Result<Task, TaskStoreError> {
        let id = TaskId::generate();
        let created_at = Utc::now();

        sqlx::query(
            "INSERT INTO tasks (id, title, description, completed, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(id.to_string())
        .bind(&new_task.title)
        .bind(&new_task.description)
        .bind(new_task.completed)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Task {
            id,
            title: new_task.title,
            description: new_task.description,
            completed: new_task.completed,
            created_at,
        })
    }

    async fn find_many(&self, completed: Option<bool>) -> Result<Vec<Task>, TaskStoreError> {
        let rows = match completed {
            Some(flag) => {
                sqlx::query_as::<_, TaskRow>(
                    "SELECT id, title, description, completed, created_at \
                     FROM tasks WHERE completed = ?1",
                )
                .bind(flag)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TaskRow>(SELECT_TASK_COLUMNS)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter().map(TaskRow::into_task).collect()
    }

    async fn find_one(&self, id: &str) -> Result<Option<Task>, TaskStoreError> {
        let Ok(task_id) = TaskId::parse(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, title, description, completed, created_at \
             FROM tasks WHERE id = ?1",
        )
        .bind(task_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TaskRow::into_task).transpose()
    }

    async fn update_one(
        &self,
        id: &str,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskStoreError> {
        let Ok(task_id) = TaskId::parse(id) else {
            return Ok(None);
        };

        // Single statement so the partial merge is one atomic round trip.
        let row = sqlx::query_as::<_, TaskRow>(
            "UPDATE tasks SET \
                 title = COALESCE(?1, title), \
                 description = COALESCE(?2, description), \
                 completed = COALESCE(?3, completed) \
             WHERE id = ?4 \
             RETURNING id, title, description, completed, created_at",
        )
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.completed)
        .bind(task_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TaskRow::into_task).transpose()
    }

    async fn delete_one(&self, id: &str) -> Result<bool, TaskStoreError> {
        let Ok(task_id) = TaskId::parse(id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(task_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// In-memory backend
// =============================================================================

/// In-memory task store used by tests.
///
/// Keeps records in a `HashMap` behind an `RwLock`; iteration order over
/// the map is arbitrary, matching the "ordering is store-defined" contract
/// of [`TaskStore::find_many`].
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::LockPoisoned`] if a writer panicked.
    pub fn len(&self) -> Result<usize, TaskStoreError> {
        Ok(self.read()?.len())
    }

    /// Returns whether the store holds no records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::LockPoisoned`] if a writer panicked.
    pub fn is_empty(&self) -> Result<bool, TaskStoreError> {
        Ok(self.read()?.is_empty())
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<TaskId, Task>>, TaskStoreError> {
        self.tasks.read().map_err(|_| TaskStoreError::LockPoisoned)
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<TaskId, Task>>, TaskStoreError> {
        self.tasks.write().map_err(|_| TaskStoreError::LockPoisoned)
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, new_task: NewTask) -> Result<Task, TaskStoreError> {
        let task = Task {
            id: TaskId::generate(),
            title: new_task.title,
            description: new_task.description,
            completed: new_task.completed,
            created_at: Utc::now(),
        };

        self.write()?.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_many(&self, completed: Option<bool>) -> Result<Vec<Task>, TaskStoreError> {
        let tasks = self.read()?;
        Ok(tasks
            .values()
            .filter(|task| completed.is_none_or(|flag| task.completed == flag))
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Task>, TaskStoreError> {
        let Ok(task_id) = TaskId::parse(id) else {
            return Ok(None);
        };

        Ok(self.read()?.get(&task_id).cloned())
    }

    async fn update_one(
        &self,
        id: &str,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskStoreError> {
        let Ok(task_id) = TaskId::parse(id) else {
            return Ok(None);
        };

        let mut tasks = self.write()?;
        let Some(task) = tasks.get_mut(&task_id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }

        Ok(Some(task.clone()))
    }

    async fn delete_one(&self, id: &str) -> Result<bool, TaskStoreError> {
        let Ok(task_id) = TaskId::parse(id) else {
            return Ok(false);
        };

        Ok(self.write()?.remove(&task_id).is_some())
    }
}

//! Task operations facade.
//!
//! [`TaskService`] is the surface the transport layer talks to. It carries
//! the one business rule of the system, the mapping from a status filter to
//! the store's equality filter; everything else is a delegation to the
//! store primitives. Every call is a single, independent, non-transactional
//! round trip.
//!
//! Field validation (non-empty title, boolean completed) happens upstream
//! in the transport layer and is not re-checked here.

use std::sync::Arc;

use crate::domain::task::{NewTask, StatusFilter, Task, TaskPatch};
use crate::infrastructure::store::{TaskStore, TaskStoreError};

/// Business facade over the task store.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Persists a new task and returns the created record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] if the store round trip fails.
    pub async fn create_task(&self, new_task: NewTask) -> Result<Task, TaskStoreError> {
        self.store.insert(new_task).await
    }

    /// Returns all tasks, optionally narrowed by a status filter.
    ///
    /// `Pending` maps to the equality filter `completed = false`,
    /// `Completed` to `completed = true`; no filter returns every record.
    /// The list is returned as the store produced it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] if the store round trip fails.
    pub async fn get_all_tasks(
        &self,
        filter: Option<StatusFilter>,
    ) -> Result<Vec<Task>, TaskStoreError> {
        self.store
            .find_many(filter.map(StatusFilter::completed_flag))
            .await
    }

    /// Returns the task with the given identifier, or `None`.
    ///
    /// An absent result is not an error; malformed identifiers are also
    /// reported as absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] if the store round trip fails.
    pub async fn get_task_by_id(&self, id: &str) -> Result<Option<Task>, TaskStoreError> {
        self.store.find_one(id).await
    }

    /// Merges the present patch fields into the task and returns the
    /// updated record, or `None` if no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] if the store round trip fails.
    pub async fn update_task(
        &self,
        id: &str,
        patch: TaskPatch,
    ) -> Result<Option<Task>, TaskStoreError> {
        self.store.update_one(id, patch).await
    }

    /// Deletes the task with the given identifier.
    ///
    /// Returns `true` if a record was removed, `false` if no such
    /// identifier existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] if the store round trip fails.
    pub async fn delete_task(&self, id: &str) -> Result<bool, TaskStoreError> {
        self.store.delete_one(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::InMemoryTaskStore;
    use rstest::rstest;

    fn service() -> TaskService {
        TaskService::new(Arc::new(InMemoryTaskStore::new()))
    }

    fn draft(title: &str, completed: bool) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: None,
            completed,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_task_returns_the_persisted_record() {
        let service = service();

        let task = service.create_task(draft("Test Task", false)).await.unwrap();

        assert_eq!(task.title, "Test Task");
        assert!(!task.completed);

        let fetched = service.get_task_by_id(&task.id.to_string()).await.unwrap();
        assert_eq!(fetched, Some(task));
    }

    #[rstest]
    #[tokio::test]
    async fn get_all_tasks_without_filter_returns_every_record() {
        let service = service();
        service.create_task(draft("Task 1", false)).await.unwrap();
        service.create_task(draft("Task 2", true)).await.unwrap();

        let tasks = service.get_all_tasks(None).await.unwrap();

        assert_eq!(tasks.len(), 2);
    }

    #[rstest]
    #[case(StatusFilter::Pending, "Task 1")]
    #[case(StatusFilter::Completed, "Task 2")]
    #[tokio::test]
    async fn get_all_tasks_narrows_to_the_matching_subset(
        #[case] filter: StatusFilter,
        #[case] expected_title: &str,
    ) {
        let service = service();
        service.create_task(draft("Task 1", false)).await.unwrap();
        service.create_task(draft("Task 2", true)).await.unwrap();

        let tasks = service.get_all_tasks(Some(filter)).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, expected_title);
    }

    #[rstest]
    #[tokio::test]
    async fn get_task_by_id_is_absent_for_unknown_identifier() {
        let service = service();

        let result = service
            .get_task_by_id("01234567-89ab-cdef-0123-456789abcdef")
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[rstest]
    #[tokio::test]
    async fn update_task_merges_and_returns_the_updated_record() {
        let service = service();
        let task = service.create_task(draft("Task", false)).await.unwrap();

        let updated = service
            .update_task(
                &task.id.to_string(),
                TaskPatch {
                    completed: Some(true),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Task");
        assert_eq!(updated.created_at, task.created_at);
    }

    #[rstest]
    #[tokio::test]
    async fn update_task_is_absent_for_unknown_identifier() {
        let service = service();

        let result = service
            .update_task("01234567-89ab-cdef-0123-456789abcdef", TaskPatch::default())
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_task_reports_true_then_false() {
        let service = service();
        let task = service.create_task(draft("Task", false)).await.unwrap();
        let id = task.id.to_string();

        assert!(service.delete_task(&id).await.unwrap());
        assert!(!service.delete_task(&id).await.unwrap());
        assert_eq!(service.get_task_by_id(&id).await.unwrap(), None);
    }
}

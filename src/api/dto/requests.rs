//! Request DTOs and their validation rules.
//!
//! Validation runs before the service is called; a failing request never
//! reaches the store. The rules:
//!
//! - create: `title` present and non-empty
//! - update: `title` non-empty when present (`completed` being a boolean
//!   is enforced by typed deserialization before these checks run)
//! - list: `status` one of `pending` / `completed` when present

use serde::Deserialize;

use crate::api::middleware::error_handler::FieldError;
use crate::domain::task::{NewTask, StatusFilter, TaskPatch};

/// Request body for `POST /tasks`.
///
/// # Example JSON
///
/// ```json
/// {
///     "title": "Buy milk",
///     "description": "2 liters",
///     "completed": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// Title of the task. Required, must not be empty.
    pub title: Option<String>,
    /// Optional free-form detail text.
    pub description: Option<String>,
    /// Initial completion flag; defaults to `false` when omitted.
    pub completed: Option<bool>,
}

impl CreateTaskRequest {
    /// Validates the request and converts it into the insert field set.
    ///
    /// # Errors
    ///
    /// Returns the field errors when `title` is missing or empty.
    pub fn validate(self) -> Result<NewTask, Vec<FieldError>> {
        match self.title {
            Some(title) if !title.is_empty() => Ok(NewTask {
                title,
                description: self.description,
                completed: self.completed.unwrap_or(false),
            }),
            _ => Err(vec![FieldError::new("title", "Title is required")]),
        }
    }
}

/// Request body for `PUT /tasks/{id}`; any subset of the mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    /// Replacement title; must not be empty when present.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Validates the request and converts it into the merge patch.
    ///
    /// # Errors
    ///
    /// Returns the field errors when `title` is present but empty.
    pub fn validate(self) -> Result<TaskPatch, Vec<FieldError>> {
        if self.title.as_deref() == Some("") {
            return Err(vec![FieldError::new("title", "Title must not be empty")]);
        }

        Ok(TaskPatch {
            title: self.title,
            description: self.description,
            completed: self.completed,
        })
    }
}

/// Query parameters for `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListTasksQuery {
    /// Optional status narrowing, `pending` or `completed`.
    pub status: Option<String>,
}

impl ListTasksQuery {
    /// Validates the query and converts it into the optional filter.
    ///
    /// # Errors
    ///
    /// Returns the field errors when `status` is present but not one of the
    /// permitted values.
    pub fn validate(&self) -> Result<Option<StatusFilter>, Vec<FieldError>> {
        match self.status.as_deref() {
            None => Ok(None),
            Some(value) => value
                .parse::<StatusFilter>()
                .map(Some)
                .map_err(|_| vec![FieldError::new("status", "Invalid status")]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // CreateTaskRequest Tests
    // =========================================================================

    #[rstest]
    fn create_accepts_a_title_and_defaults_completed() {
        let request = CreateTaskRequest {
            title: Some("Buy milk".to_string()),
            description: None,
            completed: None,
        };

        let new_task = request.validate().unwrap();

        assert_eq!(new_task.title, "Buy milk");
        assert_eq!(new_task.description, None);
        assert!(!new_task.completed);
    }

    #[rstest]
    fn create_keeps_an_explicit_completed_flag() {
        let request = CreateTaskRequest {
            title: Some("Buy milk".to_string()),
            description: Some("2 liters".to_string()),
            completed: Some(true),
        };

        let new_task = request.validate().unwrap();

        assert!(new_task.completed);
        assert_eq!(new_task.description.as_deref(), Some("2 liters"));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    fn create_rejects_missing_or_empty_title(#[case] title: Option<String>) {
        let request = CreateTaskRequest {
            title,
            description: None,
            completed: None,
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(errors, vec![FieldError::new("title", "Title is required")]);
    }

    #[rstest]
    fn create_accepts_whitespace_only_title() {
        // Titles are not trimmed; whitespace counts as content.
        let request = CreateTaskRequest {
            title: Some("  ".to_string()),
            description: None,
            completed: None,
        };

        assert!(request.validate().is_ok());
    }

    // =========================================================================
    // UpdateTaskRequest Tests
    // =========================================================================

    #[rstest]
    fn update_with_no_fields_is_an_empty_patch() {
        let request = UpdateTaskRequest {
            title: None,
            description: None,
            completed: None,
        };

        let patch = request.validate().unwrap();

        assert_eq!(patch, TaskPatch::default());
    }

    #[rstest]
    fn update_passes_present_fields_through() {
        let request = UpdateTaskRequest {
            title: Some("Renamed".to_string()),
            description: None,
            completed: Some(true),
        };

        let patch = request.validate().unwrap();

        assert_eq!(patch.title.as_deref(), Some("Renamed"));
        assert_eq!(patch.description, None);
        assert_eq!(patch.completed, Some(true));
    }

    #[rstest]
    fn update_rejects_an_empty_title() {
        let request = UpdateTaskRequest {
            title: Some(String::new()),
            description: None,
            completed: None,
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(
            errors,
            vec![FieldError::new("title", "Title must not be empty")]
        );
    }

    // =========================================================================
    // ListTasksQuery Tests
    // =========================================================================

    #[rstest]
    #[case(None, None)]
    #[case(Some("pending"), Some(StatusFilter::Pending))]
    #[case(Some("completed"), Some(StatusFilter::Completed))]
    fn list_accepts_the_permitted_status_values(
        #[case] status: Option<&str>,
        #[case] expected: Option<StatusFilter>,
    ) {
        let query = ListTasksQuery {
            status: status.map(str::to_string),
        };

        assert_eq!(query.validate().unwrap(), expected);
    }

    #[rstest]
    #[case("done")]
    #[case("Pending")]
    #[case("")]
    fn list_rejects_unknown_status_values(#[case] status: &str) {
        let query = ListTasksQuery {
            status: Some(status.to_string()),
        };

        let errors = query.validate().unwrap_err();

        assert_eq!(errors, vec![FieldError::new("status", "Invalid status")]);
    }
}

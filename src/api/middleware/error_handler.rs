//! Error handling for the API layer.
//!
//! Maps every failure class onto one wire shape, a JSON object with an
//! `errors` array:
//!
//! - validation failures carry structured field errors and answer `400`
//! - missing records carry a single message string and answer `404`
//! - store failures answer `500` with a generic message; the cause is
//!   logged, never serialized to the caller
//!
//! The [`ApiJson`] extractor routes malformed or type-mismatched request
//! bodies through the same shape instead of axum's default rejection.

use axum::Json;
use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::infrastructure::store::TaskStoreError;

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The offending request field, when the error is attributable to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

impl FieldError {
    /// Creates an error attributed to a named field.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates an error not attributable to a single field.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// API error taxonomy.
///
/// Converts into an HTTP response via [`IntoResponse`], so handlers can
/// return `Result<_, ApiError>` and use `?` throughout.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request failed field-level validation; the store was never
    /// reached.
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
    /// The addressed record does not exist. Not an exceptional condition.
    #[error("{0}")]
    NotFound(String),
    /// An unexpected failure during store access.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The not-found error every task lookup shares.
    #[must_use]
    pub fn task_not_found() -> Self {
        Self::NotFound("Task not found".to_string())
    }

    /// Returns the HTTP status this error answers with.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskStoreError> for ApiError {
    fn from(error: TaskStoreError) -> Self {
        Self::Internal(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![FieldError::message(rejection.body_text())])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::Validation(errors) => json!({ "errors": errors }),
            Self::NotFound(message) => json!({ "errors": [message] }),
            Self::Internal(cause) => {
                tracing::error!("unexpected failure during request handling: {cause}");
                json!({ "errors": ["Internal server error"] })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// `Json` extractor whose rejection is an [`ApiError`].
///
/// A body that is not valid JSON, or that does not match the target type
/// (a non-boolean `completed`, a non-string `title`), answers `400` with
/// the standard error list instead of axum's plain-text rejection.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // =========================================================================
    // FieldError Tests
    // =========================================================================

    #[rstest]
    fn field_error_serializes_field_and_message() {
        let error = FieldError::new("title", "Title is required");

        let value = serde_json::to_value(&error).unwrap();

        assert_eq!(
            value,
            json!({ "field": "title", "message": "Title is required" })
        );
    }

    #[rstest]
    fn field_error_without_field_omits_the_key() {
        let error = FieldError::message("body is not valid JSON");

        let value = serde_json::to_value(&error).unwrap();

        assert_eq!(value, json!({ "message": "body is not valid JSON" }));
    }

    // =========================================================================
    // ApiError Tests
    // =========================================================================

    #[rstest]
    fn status_codes_follow_the_taxonomy() {
        let validation = ApiError::Validation(vec![]);
        let not_found = ApiError::task_not_found();
        let internal = ApiError::Internal("boom".to_string());

        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest]
    #[tokio::test]
    async fn validation_response_lists_each_field_error() {
        let error = ApiError::Validation(vec![FieldError::new("title", "Title is required")]);

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({ "errors": [{ "field": "title", "message": "Title is required" }] })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn not_found_response_carries_a_single_message_string() {
        let response = ApiError::task_not_found().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "errors": ["Task not found"] }));
    }

    #[rstest]
    #[tokio::test]
    async fn internal_response_never_leaks_the_cause() {
        let response = ApiError::Internal("database error: disk I/O error".to_string())
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "errors": ["Internal server error"] }));
    }

    #[rstest]
    fn store_errors_convert_to_internal() {
        let error = ApiError::from(TaskStoreError::LockPoisoned);

        assert!(matches!(error, ApiError::Internal(_)));
    }
}

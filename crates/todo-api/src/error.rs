use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::{StorageError, TodoId, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// ハンドラが呼び出すサービス操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Toggle,
    Delete,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => "list_todos",
            Operation::Get => "get_todo",
            Operation::Create => "create_todo",
            Operation::Update => "update_todo",
            Operation::Toggle => "toggle_todo",
            Operation::Delete => "delete_todo",
        }
    }

    /// クライアントに返す汎用メッセージ（内部詳細は含めない）
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => "An error occurred while retrieving todos",
            Operation::Get => "An error occurred while retrieving the todo",
            Operation::Create => "An error occurred while creating the todo",
            Operation::Update => "An error occurred while updating the todo",
            Operation::Toggle => "An error occurred while toggling the todo",
            Operation::Delete => "An error occurred while deleting the todo",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo with ID {0} not found")]
    NotFound(TodoId),

    #[error("Resource not found")]
    RouteNotFound,

    #[error("Validation failed: {0}")]
    Validation(ValidationError),

    #[error("{} failed", .0.name())]
    Internal(Operation),
}

impl ApiError {
    /// ストレージ障害を記録し、汎用の内部エラーに変換する
    pub fn internal(operation: Operation, todo_id: Option<TodoId>, error: StorageError) -> Self {
        match todo_id {
            Some(id) => tracing::error!(
                operation = operation.name(),
                todo_id = id.value(),
                error = %error,
                "Storage failure"
            ),
            None => tracing::error!(
                operation = operation.name(),
                error = %error,
                "Storage failure"
            ),
        }
        ApiError::Internal(operation)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(error)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a ValidationError>,
}

const VALIDATION_MESSAGE: &str = "One or more validation errors occurred.";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => ErrorBody {
                message: VALIDATION_MESSAGE.to_string(),
                errors: Some(errors),
            },
            ApiError::Internal(operation) => ErrorBody {
                message: operation.failure_message().to_string(),
                errors: None,
            },
            _ => ErrorBody {
                message: self.to_string(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Application-wide error type.
///
/// Each variant pins down one of the response shapes the API produces:
/// authentication failures all render the same 401 body, authorization
/// failures render an empty 403, validation failures carry the full list of
/// violated constraints, and anything unexpected collapses to an opaque 500
/// with the real cause logged server-side.
#[derive(Debug)]
pub enum AppError {
    AccessDenied,
    Forbidden,
    NotFound(String),
    Validation(Vec<String>),
    Internal(Error),
}

impl AppError {
    pub fn access_denied() -> Self {
        Self::AccessDenied
    }

    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::AccessDenied => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Access Denied" })),
            )
                .into_response(),
            AppError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            AppError::Internal(err) => {
                error!(error = ?err, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use people_admin_api::ApiError;
use people_admin_db::rules::BulkShiftError;
use serde::Serialize;
use std::error::Error;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Error returned by console handlers, rendered as `{"error": ...}`
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ConsoleError(#[from] pub ApiError);

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ConsoleError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(ApiError::not_found(message))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self(ApiError::validation(message))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self(ApiError::Conflict(message.into()))
    }
}

impl From<ValidationErrors> for ConsoleError {
    fn from(errors: ValidationErrors) -> Self {
        Self(ApiError::from(errors))
    }
}

impl From<sqlx::Error> for ConsoleError {
    fn from(err: sqlx::Error) -> Self {
        let api_error = match &err {
            sqlx::Error::RowNotFound => ApiError::not_found("record not found"),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => ApiError::Conflict("record already exists".to_string()),
                Some("23503") => {
                    ApiError::validation("referenced record does not exist")
                }
                Some("22001") | Some("23514") => ApiError::validation(db_err.message().to_string()),
                _ => ApiError::DatabaseError(err.to_string()),
            },
            _ => ApiError::DatabaseError(err.to_string()),
        };
        Self(api_error)
    }
}

/// Repository errors arrive boxed; recover the ones with a meaning for the
/// client before treating the rest as internal failures.
impl From<Box<dyn Error + Send + Sync>> for ConsoleError {
    fn from(err: Box<dyn Error + Send + Sync>) -> Self {
        let err = match err.downcast::<sqlx::Error>() {
            Ok(db_err) => return Self::from(*db_err),
            Err(other) => other,
        };
        let err = match err.downcast::<BulkShiftError>() {
            Ok(shift_err) => return Self::validation(shift_err.to_string()),
            Err(other) => other,
        };
        match err.downcast::<ApiError>() {
            Ok(api_err) => Self(*api_err),
            Err(other) => Self(ApiError::InternalError(other.to_string())),
        }
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::DatabaseError(msg) => {
                error!(error = %msg, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database operation failed".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

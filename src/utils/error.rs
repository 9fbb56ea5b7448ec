//! Error Handling Utilities
//!
//! Application error types and their HTTP response mapping.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Content type applied to every JSON response
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Generic message for any infrastructure failure. Internal detail is
/// logged, never sent to the client.
const SIGNUP_UNAVAILABLE: &str = "signup unavailable";

/// Main application error type covering every failure surfaced over HTTP
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range input, surfaced with a specific message
    #[error("validation error: {0}")]
    Validation(String),

    /// Duplicate resource, surfaced as 409
    #[error("conflict: {0}")]
    Conflict(String),

    /// Request used an unsupported HTTP method
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing operation failed
    #[error("password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Any other internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

/// Standard error response body
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Serializes `body` with an explicit `application/json; charset=utf-8`
/// content type.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    response
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method not allowed".to_string(),
            ),
            AppError::Database(err) => {
                log::error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SIGNUP_UNAVAILABLE.to_string(),
                )
            }
            AppError::Hashing(err) => {
                log::error!("password hashing error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SIGNUP_UNAVAILABLE.to_string(),
                )
            }
            AppError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SIGNUP_UNAVAILABLE.to_string(),
                )
            }
        };

        json_response(status, &ErrorResponse::new(message))
    }
}

/// Result type alias for operations that can return AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("invalid email address".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_maps_to_conflict() {
        let response =
            AppError::Conflict("account exists, please sign in".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_method_not_allowed_maps_to_405() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_infrastructure_errors_map_to_internal_server_error() {
        let database = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(database.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = AppError::Internal("lookup failed".to_string()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_json_content_type_includes_charset() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
    }

    #[test]
    fn test_error_response_body_shape() {
        let body = serde_json::to_string(&ErrorResponse::new("nope")).unwrap();
        assert_eq!(body, r#"{"error":"nope"}"#);
    }
}

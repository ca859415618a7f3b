//! Error type with structured code and details

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use super::codes::ErrorCode;

/// Application error with structured error code and details
///
/// The primary error type for the workspace:
/// - Standardized codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending resource, context)
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// HTTP status code for this error
    pub fn http_status(&self) -> http::StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Conflict, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_message() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "invalid email address");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "invalid email address");
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("name must not be empty")
            .with_detail("field", "name")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "name");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::not_found("employee");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "employee not found");
        assert!(err.details.as_ref().unwrap().contains_key("resource"));

        let err = AppError::conflict("department has employees");
        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(err.message, "department has employees");

        let err = AppError::database("connection refused");
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::NotFound, "shift not found");
        assert_eq!(format!("{}", err), "shift not found");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::validation("bad").http_status(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("busy").http_status(),
            http::StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::new(ErrorCode::InternalError).http_status(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

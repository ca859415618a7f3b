//! Unified error codes for the roster workspace
//!
//! Error codes are organized by range:
//! - 0xxx: General errors (validation, not found, conflicts)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ErrorCategory;

/// Unified error code enum
///
/// Codes are represented as u16 values for stable serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Conflicting state (referential-integrity guard, duplicate name)
    Conflict = 4,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "validation failed",
            Self::NotFound => "resource not found",
            Self::Conflict => "conflicting state",
            Self::InternalError => "internal server error",
            Self::DatabaseError => "database error",
        }
    }

    /// HTTP status code for this error
    pub fn http_status(&self) -> http::StatusCode {
        match self {
            Self::ValidationFailed => http::StatusCode::BAD_REQUEST,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::Conflict => http::StatusCode::CONFLICT,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::DatabaseError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationFailed => ErrorCategory::Client,
            Self::NotFound | Self::Conflict => ErrorCategory::Business,
            Self::InternalError | Self::DatabaseError => ErrorCategory::System,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::Conflict),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::Conflict,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(42), Err(InvalidErrorCode(42)));
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::NotFound.http_status(), http::StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::Conflict.http_status(), http::StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::Client);
        assert_eq!(ErrorCode::Conflict.category(), ErrorCategory::Business);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}

//! Unified error system for the roster workspace
//!
//! This module provides:
//! - [`ErrorCode`]: standardized codes for every failure class
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Create an error with a custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "invalid email address");
//!
//! // Create an error with details
//! let err = AppError::not_found("department");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};

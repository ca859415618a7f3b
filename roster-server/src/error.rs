//! Unified service-layer error type for roster-server
//!
//! `ServiceError` bridges the gap between DB-layer errors (`sqlx::Error`,
//! `BoxError`) and the request-layer error (`AppError`). It enables `?`
//! propagation without manual `.map_err(|e| { tracing::error!(...); ... })`
//! boilerplate.

use axum::response::{Html, IntoResponse};
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::views;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error — only two variants, keeps things simple.
///
/// - `Db`: database/infrastructure errors (logged once, mapped to DatabaseError)
/// - `App`: business-rule errors (already an AppError with the correct ErrorCode)
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Database or infrastructure error
    #[error("{0}")]
    Db(BoxError),
    /// Business-rule error
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        let status = app_error.http_status();
        (status, Html(views::error_page(status, &app_error.message))).into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

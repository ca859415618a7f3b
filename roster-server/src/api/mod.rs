//! HTTP routes for roster-server

pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod schedule;

use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use http::StatusCode;
use shared::error::{AppError, ErrorCategory};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::views;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route(
            "/departments",
            get(departments::list).post(departments::create),
        )
        .route("/departments/{id}/delete", post(departments::delete))
        .route("/employees", get(employees::list).post(employees::create))
        .route("/employees/new", get(employees::new_form))
        .route("/employees/{id}/edit", get(employees::edit_form))
        .route("/employees/{id}", post(employees::update))
        .route("/employees/{id}/delete", post(employees::delete))
        .route("/schedule", get(schedule::month_view))
        .route("/schedule/shifts", post(schedule::create_shift))
        .route("/schedule/shifts/{id}/delete", post(schedule::delete_shift))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 404 page for unmatched routes
async fn not_found() -> Response {
    let status = StatusCode::NOT_FOUND;
    (status, Html(views::error_page(status, "page not found"))).into_response()
}

/// Re-render a form screen with feedback instead of redirecting
pub(crate) fn form_redisplay(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}

/// Redirect after a successful write (POST → GET)
pub(crate) fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}

/// Inline message for a failed write: business-rule errors keep their
/// message, infrastructure failures collapse to a generic retry line so
/// internals never leak into the page.
pub(crate) fn inline_message(err: &AppError, generic: &str) -> String {
    match err.code.category() {
        ErrorCategory::System => generic.to_string(),
        _ => err.message.clone(),
    }
}

//! Department handlers

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Response};
use http::StatusCode;
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};

use super::{form_redisplay, inline_message, see_other};
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct DepartmentForm {
    #[serde(default)]
    pub name: String,
}

/// GET /departments
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, ServiceError> {
    let departments = db::department::list_departments(&state.pool).await?;
    Ok(Html(views::departments::page(&departments, "", &[])))
}

/// POST /departments
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<DepartmentForm>,
) -> Result<Response, ServiceError> {
    let name = form.name.trim();
    if name.is_empty() {
        return redisplay(
            &state,
            StatusCode::BAD_REQUEST,
            &form.name,
            vec!["name must not be empty".to_string()],
        )
        .await;
    }

    match db::department::create_department(&state.pool, name).await {
        Ok(_) => Ok(see_other("/departments")),
        Err(e) => {
            let err = AppError::from(e);
            let message = inline_message(&err, "could not save department, please try again");
            redisplay(&state, err.http_status(), &form.name, vec![message]).await
        }
    }
}

/// POST /departments/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    match db::department::delete_department(&state.pool, id).await {
        Ok(()) => Ok(see_other("/departments")),
        // Deleting something that is already gone gets the dedicated page
        Err(ServiceError::App(err)) if err.code == ErrorCode::NotFound => {
            Err(ServiceError::App(err))
        }
        Err(e) => {
            let err = AppError::from(e);
            let message = inline_message(&err, "could not delete department, please try again");
            redisplay(&state, err.http_status(), "", vec![message]).await
        }
    }
}

/// Reload the department list and re-render the screen with feedback
async fn redisplay(
    state: &AppState,
    status: StatusCode,
    form_name: &str,
    errors: Vec<String>,
) -> Result<Response, ServiceError> {
    let departments = db::department::list_departments(&state.pool).await?;
    Ok(form_redisplay(
        status,
        views::departments::page(&departments, form_name, &errors),
    ))
}

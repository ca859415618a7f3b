//! Employee handlers

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Response};
use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::EmployeeCreate;

use super::{form_redisplay, inline_message, see_other};
use crate::db;
use crate::error::ServiceError;
use crate::forms::{parse_employee_form, EmployeeForm};
use crate::state::AppState;
use crate::views;

/// GET /employees
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, ServiceError> {
    let employees = db::employee::list_employees(&state.pool).await?;
    Ok(Html(views::employees::list_page(&employees)))
}

/// GET /employees/new
pub async fn new_form(State(state): State<AppState>) -> Result<Html<String>, ServiceError> {
    let departments = db::department::list_departments(&state.pool).await?;
    Ok(Html(views::employees::form_page(
        "New employee",
        "/employees",
        &EmployeeForm::default(),
        &departments,
        &[],
    )))
}

/// POST /employees
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, ServiceError> {
    let data = match parse_employee_form(&form) {
        Ok(data) => data,
        Err(errors) => {
            return redisplay(
                &state,
                StatusCode::BAD_REQUEST,
                "New employee",
                "/employees",
                &form,
                errors,
            )
            .await;
        }
    };

    match db::employee::create_employee(&state.pool, &data).await {
        Ok(_) => Ok(see_other("/employees")),
        Err(e) => save_failed(&state, "New employee", "/employees", &form, e).await,
    }
}

/// GET /employees/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ServiceError> {
    let employee = db::employee::get_employee(&state.pool, id).await?;
    let departments = db::department::list_departments(&state.pool).await?;
    Ok(Html(views::employees::form_page(
        "Edit employee",
        &format!("/employees/{id}"),
        &EmployeeForm::from_employee(&employee),
        &departments,
        &[],
    )))
}

/// POST /employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, ServiceError> {
    let action = format!("/employees/{id}");

    let data: EmployeeCreate = match parse_employee_form(&form) {
        Ok(data) => data,
        Err(errors) => {
            return redisplay(
                &state,
                StatusCode::BAD_REQUEST,
                "Edit employee",
                &action,
                &form,
                errors,
            )
            .await;
        }
    };

    match db::employee::update_employee(&state.pool, id, &data).await {
        Ok(()) => Ok(see_other("/employees")),
        Err(ServiceError::App(err)) if err.code == ErrorCode::NotFound => {
            Err(ServiceError::App(err))
        }
        Err(e) => save_failed(&state, "Edit employee", &action, &form, e).await,
    }
}

/// POST /employees/{id}/delete (shifts go with the employee, cascade)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    db::employee::delete_employee(&state.pool, id).await?;
    Ok(see_other("/employees"))
}

/// Reload the department list and re-render the form with feedback
async fn redisplay(
    state: &AppState,
    status: StatusCode,
    title: &str,
    action: &str,
    form: &EmployeeForm,
    errors: Vec<String>,
) -> Result<Response, ServiceError> {
    let departments = db::department::list_departments(&state.pool).await?;
    Ok(form_redisplay(
        status,
        views::employees::form_page(title, action, form, &departments, &errors),
    ))
}

async fn save_failed(
    state: &AppState,
    title: &str,
    action: &str,
    form: &EmployeeForm,
    e: ServiceError,
) -> Result<Response, ServiceError> {
    let err = AppError::from(e);
    let message = inline_message(&err, "could not save employee, please try again");
    redisplay(state, err.http_status(), title, action, form, vec![message]).await
}

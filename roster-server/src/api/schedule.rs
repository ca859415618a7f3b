//! Schedule handlers

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{Html, Response};
use http::StatusCode;
use serde::Deserialize;
use shared::error::AppError;

use super::{form_redisplay, see_other};
use crate::db;
use crate::error::ServiceError;
use crate::forms::{parse_shift_form, ShiftForm};
use crate::schedule::{
    default_form_values, group_by_date, month_bounds, resolve_month_year, MonthRef,
};
use crate::state::AppState;
use crate::views;

/// Raw query parameters; anything non-numeric falls back to "now" in
/// `resolve_month_year` instead of rejecting the request
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
    pub year: Option<String>,
}

/// Month/year hidden fields in shift delete bodies (redirect target)
#[derive(Debug, Deserialize)]
pub struct DeleteShiftForm {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
}

/// GET /schedule?month=&year=
pub async fn month_view(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Html<String>, ServiceError> {
    let current = resolve_month_year(
        query.month.as_deref().and_then(|m| m.parse().ok()),
        query.year.as_deref().and_then(|y| y.parse().ok()),
    );
    let form = ShiftForm::seeded(&default_form_values(current), current);
    let html = render_month(&state, current, &form, &[]).await?;
    Ok(Html(html))
}

/// POST /schedule/shifts
pub async fn create_shift(
    State(state): State<AppState>,
    Form(form): Form<ShiftForm>,
) -> Result<Response, ServiceError> {
    let current = resolve_month_year(form.month.parse().ok(), form.year.parse().ok());

    let data = match parse_shift_form(&form) {
        Ok(data) => data,
        Err(errors) => {
            let html = render_month(&state, current, &form, &errors).await?;
            return Ok(form_redisplay(StatusCode::BAD_REQUEST, html));
        }
    };

    match db::shift::create_shift(&state.pool, &data).await {
        Ok(_) => Ok(see_other(&schedule_url(current))),
        Err(e) => {
            let err = AppError::from(e);
            let errors = vec!["could not save shift".to_string()];
            let html = render_month(&state, current, &form, &errors).await?;
            Ok(form_redisplay(err.http_status(), html))
        }
    }
}

/// POST /schedule/shifts/{id}/delete
pub async fn delete_shift(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeleteShiftForm>,
) -> Result<Response, ServiceError> {
    let current = resolve_month_year(form.month.parse().ok(), form.year.parse().ok());

    match db::shift::delete_shift(&state.pool, id).await {
        Ok(()) => Ok(see_other(&schedule_url(current))),
        Err(e) => {
            let err = AppError::from(e);
            let seeded = ShiftForm::seeded(&default_form_values(current), current);
            let errors = vec!["could not delete shift".to_string()];
            let html = render_month(&state, current, &seeded, &errors).await?;
            Ok(form_redisplay(err.http_status(), html))
        }
    }
}

fn schedule_url(current: MonthRef) -> String {
    format!("/schedule?month={}&year={}", current.month, current.year)
}

/// Load and render one month of the schedule with the given form state
async fn render_month(
    state: &AppState,
    current: MonthRef,
    form: &ShiftForm,
    errors: &[String],
) -> Result<String, ServiceError> {
    let (from, to) = month_bounds(current);
    let shifts = db::shift::shifts_between(&state.pool, from, to).await?;
    let grouped = group_by_date(shifts);
    let employees = db::employee::list_employees(&state.pool).await?;
    Ok(views::schedule::page(
        current, &grouped, &employees, form, errors,
    ))
}

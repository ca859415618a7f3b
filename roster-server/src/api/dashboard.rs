//! Dashboard handler

use axum::extract::State;
use axum::response::Html;
use chrono::{Datelike, Local};

use crate::db;
use crate::error::ServiceError;
use crate::schedule::{month_bounds, month_label, MonthRef};
use crate::state::AppState;
use crate::views;

/// GET /: entity counts plus the shift count of the current month
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ServiceError> {
    let today = Local::now().date_naive();
    let current = MonthRef {
        year: today.year(),
        month: today.month(),
    };
    let (from, to) = month_bounds(current);

    let employee_count = db::employee::count_employees(&state.pool).await?;
    let department_count = db::department::count_departments(&state.pool).await?;
    let shifts_this_month = db::shift::count_shifts_between(&state.pool, from, to).await?;

    let month = format!("{} {}", month_label(current.month), current.year);
    Ok(Html(views::dashboard::page(
        employee_count,
        department_count,
        shifts_this_month,
        &month,
    )))
}

//! Shift database operations

use chrono::NaiveDate;
use shared::error::AppError;
use shared::models::{ScheduledShift, ShiftCreate};
use shared::util::now_millis;
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

/// Shifts with `from <= shift_date < to`, joined with the owning
/// employee's name, ordered by date then start time.
pub async fn shifts_between(
    pool: &PgPool,
    from: NaiveDate,
    to: NaiveDate,
) -> ServiceResult<Vec<ScheduledShift>> {
    let rows: Vec<ScheduledShift> = sqlx::query_as(
        r#"
        SELECT s.id, s.employee_id, e.name AS employee_name,
               s.shift_date, s.start_time, s.end_time
        FROM shifts s
        JOIN employees e ON e.id = s.employee_id
        WHERE s.shift_date >= $1 AND s.shift_date < $2
        ORDER BY s.shift_date, s.start_time
        "#,
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_shift(pool: &PgPool, data: &ShiftCreate) -> ServiceResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO shifts (employee_id, shift_date, start_time, end_time, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(data.employee_id)
    .bind(data.shift_date)
    .bind(data.start_time)
    .bind(data.end_time)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn delete_shift(pool: &PgPool, id: i64) -> ServiceResult<()> {
    let rows = sqlx::query("DELETE FROM shifts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(ServiceError::App(AppError::not_found("shift")));
    }
    Ok(())
}

pub async fn count_shifts_between(
    pool: &PgPool,
    from: NaiveDate,
    to: NaiveDate,
) -> ServiceResult<i64> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM shifts WHERE shift_date >= $1 AND shift_date < $2")
            .bind(from)
            .bind(to)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

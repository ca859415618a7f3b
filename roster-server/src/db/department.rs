//! Department database operations

use shared::error::AppError;
use shared::models::Department;
use shared::util::now_millis;
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

pub async fn list_departments(pool: &PgPool) -> ServiceResult<Vec<Department>> {
    let rows: Vec<Department> = sqlx::query_as(
        r#"
        SELECT id, name, created_at
        FROM departments
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert a department. The name is expected trimmed and non-empty; a
/// duplicate name surfaces as a Conflict error.
pub async fn create_department(pool: &PgPool, name: &str) -> ServiceResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO departments (name, created_at)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(now_millis())
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            ServiceError::App(AppError::conflict("a department with this name already exists"))
        }
        _ => ServiceError::from(e),
    })?;
    Ok(id)
}

/// Delete a department unless employees still reference it.
///
/// The reference count and the delete run in one transaction, so an
/// employee inserted concurrently cannot slip between the check and the
/// delete.
pub async fn delete_department(pool: &PgPool, id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    let (employee_count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM employees WHERE department_id = $1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
    if employee_count > 0 {
        return Err(ServiceError::App(AppError::conflict(
            "department has employees",
        )));
    }

    let rows = sqlx::query("DELETE FROM departments WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(ServiceError::App(AppError::not_found("department")));
    }

    tx.commit().await?;
    Ok(())
}

pub async fn count_departments(pool: &PgPool) -> ServiceResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM departments")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

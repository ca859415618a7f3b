//! Employee database operations

use shared::error::AppError;
use shared::models::{Employee, EmployeeCreate};
use shared::util::now_millis;
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

pub async fn list_employees(pool: &PgPool) -> ServiceResult<Vec<Employee>> {
    let rows: Vec<Employee> = sqlx::query_as(
        r#"
        SELECT e.id, e.name, e.email, e.employment_type, e.hours_per_month,
               e.department_id, d.name AS department_name, e.created_at
        FROM employees e
        LEFT JOIN departments d ON d.id = e.department_id
        ORDER BY e.name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_employee(pool: &PgPool, id: i64) -> ServiceResult<Employee> {
    let employee: Employee = sqlx::query_as(
        r#"
        SELECT e.id, e.name, e.email, e.employment_type, e.hours_per_month,
               e.department_id, d.name AS department_name, e.created_at
        FROM employees e
        LEFT JOIN departments d ON d.id = e.department_id
        WHERE e.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found("employee"))?;
    Ok(employee)
}

pub async fn create_employee(pool: &PgPool, data: &EmployeeCreate) -> ServiceResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO employees (name, email, employment_type, hours_per_month,
                               department_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(data.employment_type)
    .bind(data.hours_per_month)
    .bind(data.department_id)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn update_employee(
    pool: &PgPool,
    id: i64,
    data: &EmployeeCreate,
) -> ServiceResult<()> {
    let rows = sqlx::query(
        r#"
        UPDATE employees SET
            name = $1, email = $2, employment_type = $3,
            hours_per_month = $4, department_id = $5
        WHERE id = $6
        "#,
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(data.employment_type)
    .bind(data.hours_per_month)
    .bind(data.department_id)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(ServiceError::App(AppError::not_found("employee")));
    }
    Ok(())
}

/// Delete an employee. The store cascades the delete to the employee's
/// shifts.
pub async fn delete_employee(pool: &PgPool, id: i64) -> ServiceResult<()> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(ServiceError::App(AppError::not_found("employee")));
    }
    Ok(())
}

pub async fn count_employees(pool: &PgPool) -> ServiceResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

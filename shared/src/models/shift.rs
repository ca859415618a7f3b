//! Shift model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Shift joined with the owning employee's name (schedule view shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ScheduledShift {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub shift_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Create shift payload (validated form output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCreate {
    pub employee_id: i64,
    pub shift_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

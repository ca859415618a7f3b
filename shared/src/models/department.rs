//! Department model

use serde::{Deserialize, Serialize};

/// Department record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
}

//! Employee model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two permitted employment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "employment_type", rename_all = "snake_case")
)]
pub enum EmploymentType {
    FullTime,
    PartTime,
}

impl EmploymentType {
    /// Wire value as submitted by the employee form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
        }
    }

    /// Parse the exact wire value; anything else is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full_time" => Some(Self::FullTime),
            "part_time" => Some(Self::PartTime),
            _ => None,
        }
    }

    /// Display label for list screens
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
        }
    }
}

/// Employee record joined with its department name (list/detail shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub employment_type: EmploymentType,
    pub hours_per_month: Option<Decimal>,
    pub department_id: Option<i64>,
    /// Name of the referenced department (None when unassigned)
    pub department_name: Option<String>,
    pub created_at: i64,
}

/// Create/update employee payload (validated form output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: Option<String>,
    pub employment_type: EmploymentType,
    pub hours_per_month: Option<Decimal>,
    pub department_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_type_parse() {
        assert_eq!(EmploymentType::parse("full_time"), Some(EmploymentType::FullTime));
        assert_eq!(EmploymentType::parse("part_time"), Some(EmploymentType::PartTime));
        assert_eq!(EmploymentType::parse("fulltime"), None);
        assert_eq!(EmploymentType::parse("FULL_TIME"), None);
        assert_eq!(EmploymentType::parse(""), None);
    }

    #[test]
    fn test_employment_type_roundtrip() {
        for ty in [EmploymentType::FullTime, EmploymentType::PartTime] {
            assert_eq!(EmploymentType::parse(ty.as_str()), Some(ty));
        }
    }
}

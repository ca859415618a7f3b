//! Form normalization and validation
//!
//! Pure functions from raw submitted text to typed payloads. Every
//! violated rule is collected; the caller keeps the raw form for
//! redisplay when the error list is non-empty.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{Employee, EmployeeCreate, EmploymentType, ShiftCreate};

use crate::schedule::{MonthRef, ShiftFormDefaults};

// ── Employee form ───────────────────────────────────────────────────

/// Raw employee form body as submitted by the browser
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub hours_per_month: String,
    #[serde(default)]
    pub department_id: String,
}

impl EmployeeForm {
    /// Prefill from an existing record (edit screen)
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone().unwrap_or_default(),
            employment_type: employee.employment_type.as_str().to_string(),
            hours_per_month: employee
                .hours_per_month
                .map(|h| h.to_string())
                .unwrap_or_default(),
            department_id: employee
                .department_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Normalize and validate an employee form, collecting every violated
/// rule. Empty optional inputs normalize to None.
pub fn parse_employee_form(form: &EmployeeForm) -> Result<EmployeeCreate, Vec<String>> {
    let mut errors = Vec::new();

    let name = form.name.trim().to_string();
    if name.is_empty() {
        errors.push("name must not be empty".to_string());
    }

    let email = match form.email.trim() {
        "" => None,
        trimmed if is_valid_email(trimmed) => Some(trimmed.to_string()),
        _ => {
            errors.push("invalid email address".to_string());
            None
        }
    };

    let employment_type = match EmploymentType::parse(&form.employment_type) {
        Some(ty) => ty,
        None => {
            errors.push("invalid employment type".to_string());
            // placeholder; the error list is non-empty so this never persists
            EmploymentType::FullTime
        }
    };

    let hours_per_month = match form.hours_per_month.trim() {
        "" => None,
        trimmed => match trimmed.parse::<Decimal>() {
            Ok(hours) if hours >= Decimal::ZERO => Some(hours),
            _ => {
                errors.push("hours must be a positive number".to_string());
                None
            }
        },
    };

    let department_id = match form.department_id.trim() {
        "" => None,
        trimmed => match trimmed.parse::<i64>() {
            Ok(id) if id >= 1 => Some(id),
            _ => {
                errors.push("invalid department selection".to_string());
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(EmployeeCreate {
        name,
        email,
        employment_type,
        hours_per_month,
        department_id,
    })
}

/// `local@domain.tld` shape: no whitespace and no embedded `@` on either
/// side, at least one dot in the domain with non-empty parts around it.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    if domain.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// ── Shift form ──────────────────────────────────────────────────────

/// Raw shift form body. `month`/`year` carry the viewed month so the
/// handler can redirect (or redisplay) the right schedule page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShiftForm {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub shift_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
}

impl ShiftForm {
    /// Seed the creation form for a freshly rendered schedule page
    pub fn seeded(defaults: &ShiftFormDefaults, current: MonthRef) -> Self {
        Self {
            employee_id: String::new(),
            shift_date: defaults.date.format("%Y-%m-%d").to_string(),
            start_time: defaults.start_time.to_string(),
            end_time: defaults.end_time.to_string(),
            month: current.month.to_string(),
            year: current.year.to_string(),
        }
    }
}

/// Normalize and validate a shift form, collecting every violated rule.
pub fn parse_shift_form(form: &ShiftForm) -> Result<ShiftCreate, Vec<String>> {
    let mut errors = Vec::new();

    let employee_id = match form.employee_id.trim().parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push("select an employee".to_string());
            None
        }
    };

    let shift_date = match NaiveDate::parse_from_str(form.shift_date.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push("invalid date".to_string());
            None
        }
    };

    let start_time = parse_hhmm(form.start_time.trim());
    if start_time.is_none() {
        errors.push("invalid start time".to_string());
    }
    let end_time = parse_hhmm(form.end_time.trim());
    if end_time.is_none() {
        errors.push("invalid end time".to_string());
    }

    if let (Some(start), Some(end)) = (start_time, end_time)
        && start >= end
    {
        errors.push("end time must be after start time".to_string());
    }

    match (employee_id, shift_date, start_time, end_time) {
        (Some(employee_id), Some(shift_date), Some(start_time), Some(end_time))
            if errors.is_empty() =>
        {
            Ok(ShiftCreate {
                employee_id,
                shift_date,
                start_time,
                end_time,
            })
        }
        _ => Err(errors),
    }
}

/// Strict zero-padded 24-hour `HH:MM`
fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return None;
    }
    let hour = (bytes[0] - b'0') as u32 * 10 + (bytes[1] - b'0') as u32;
    let minute = (bytes[3] - b'0') as u32 * 10 + (bytes[4] - b'0') as u32;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

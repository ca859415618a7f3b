//! Monthly schedule derivation
//!
//! Month resolution from query parameters, previous/next navigation via
//! calendar arithmetic, date-window computation, per-day grouping, and
//! creation-form defaults.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, Months, NaiveDate};
use shared::models::ScheduledShift;

/// One calendar month as shown by the schedule screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    /// 1-based month
    pub month: u32,
}

impl MonthRef {
    fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Day 1 of this month. Infallible for the ranges `resolve_month_year`
    /// and `navigation_targets` produce.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }
}

/// Resolve the viewed month from optional query parameters. Absent or
/// out-of-range values silently fall back to the current local month;
/// this never errors.
pub fn resolve_month_year(month: Option<i32>, year: Option<i32>) -> MonthRef {
    match (month, year) {
        (Some(m), Some(y)) if (1..=12).contains(&m) && (1970..=9999).contains(&y) => MonthRef {
            year: y,
            month: m as u32,
        },
        _ => MonthRef::of(Local::now().date_naive()),
    }
}

/// Full English month name for navigation display
pub fn month_label(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Previous and next month, computed on day 1 of the adjacent months so
/// year rollovers at the 1/12 boundaries come out right.
pub fn navigation_targets(current: MonthRef) -> (MonthRef, MonthRef) {
    let first = current.first_day();
    let previous = first.checked_sub_months(Months::new(1)).unwrap_or(first);
    let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
    (MonthRef::of(previous), MonthRef::of(next))
}

/// Half-open date window `[day 1, day 1 of next month)`
pub fn month_bounds(current: MonthRef) -> (NaiveDate, NaiveDate) {
    let first = current.first_day();
    let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
    (first, next)
}

/// Partition an ordered shift list into per-day buckets. Iteration order
/// of the map is date ascending; each bucket keeps the start-time order
/// of the source query.
pub fn group_by_date(shifts: Vec<ScheduledShift>) -> BTreeMap<NaiveDate, Vec<ScheduledShift>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<ScheduledShift>> = BTreeMap::new();
    for shift in shifts {
        grouped.entry(shift.shift_date).or_default().push(shift);
    }
    grouped
}

/// Seed values for the shift creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftFormDefaults {
    pub date: NaiveDate,
    pub start_time: &'static str,
    pub end_time: &'static str,
}

/// Today's date when viewing the current month, else day 1 of the viewed
/// month; times default to a standard office day.
pub fn default_form_values(viewed: MonthRef) -> ShiftFormDefaults {
    let today = Local::now().date_naive();
    let date = if MonthRef::of(today) == viewed {
        today
    } else {
        viewed.first_day()
    };
    ShiftFormDefaults {
        date,
        start_time: "09:00",
        end_time: "17:00",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn shift(id: i64, date: (i32, u32, u32), start: (u32, u32)) -> ScheduledShift {
        ScheduledShift {
            id,
            employee_id: 1,
            employee_name: "Ana".to_string(),
            shift_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_resolve_valid_pair() {
        let resolved = resolve_month_year(Some(3), Some(2024));
        assert_eq!(resolved, MonthRef { year: 2024, month: 3 });
    }

    #[test]
    fn test_resolve_falls_back_to_now() {
        let today = Local::now().date_naive();
        let now = MonthRef {
            year: today.year(),
            month: today.month(),
        };
        assert_eq!(resolve_month_year(None, None), now);
        assert_eq!(resolve_month_year(Some(3), None), now);
        assert_eq!(resolve_month_year(Some(0), Some(2024)), now);
        assert_eq!(resolve_month_year(Some(13), Some(2024)), now);
        assert_eq!(resolve_month_year(Some(3), Some(1969)), now);
    }

    #[test]
    fn test_navigation_year_rollover() {
        let (previous, next) = navigation_targets(MonthRef { year: 2024, month: 1 });
        assert_eq!(previous, MonthRef { year: 2023, month: 12 });
        assert_eq!(next, MonthRef { year: 2024, month: 2 });

        let (previous, next) = navigation_targets(MonthRef { year: 2024, month: 12 });
        assert_eq!(previous, MonthRef { year: 2024, month: 11 });
        assert_eq!(next, MonthRef { year: 2025, month: 1 });
    }

    #[test]
    fn test_month_bounds() {
        let (from, to) = month_bounds(MonthRef { year: 2024, month: 3 });
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());

        let (from, to) = month_bounds(MonthRef { year: 2024, month: 12 });
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(1), "January");
        assert_eq!(month_label(12), "December");
        assert_eq!(month_label(0), "");
        assert_eq!(month_label(13), "");
    }

    #[test]
    fn test_group_by_date_preserves_order() {
        let shifts = vec![
            shift(1, (2024, 3, 15), (9, 0)),
            shift(2, (2024, 3, 15), (13, 30)),
            shift(3, (2024, 3, 16), (8, 0)),
        ];
        let grouped = group_by_date(shifts);

        let days: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
            ]
        );

        let first_day = &grouped[&days[0]];
        assert_eq!(
            first_day.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_default_form_values_other_month() {
        let today = Local::now().date_naive();
        let other = if today.month() == 1 {
            MonthRef { year: today.year(), month: 2 }
        } else {
            MonthRef { year: today.year(), month: 1 }
        };
        let defaults = default_form_values(other);
        assert_eq!(defaults.date, other.first_day());
        assert_eq!(defaults.start_time, "09:00");
        assert_eq!(defaults.end_time, "17:00");
    }

    #[test]
    fn test_default_form_values_current_month() {
        let today = Local::now().date_naive();
        let current = MonthRef {
            year: today.year(),
            month: today.month(),
        };
        assert_eq!(default_form_values(current).date, today);
    }
}

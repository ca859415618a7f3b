//! Monthly schedule screen

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared::models::{Employee, ScheduledShift};
use shared::util::escape_html;

use super::{error_list, layout};
use crate::forms::ShiftForm;
use crate::schedule::{MonthRef, month_label};

/// The schedule screen: month navigation, shifts grouped per day, and the
/// shift creation form (values preserved across redisplay).
pub fn page(
    current: MonthRef,
    grouped: &BTreeMap<NaiveDate, Vec<ScheduledShift>>,
    employees: &[Employee],
    form: &ShiftForm,
    errors: &[String],
) -> String {
    let (previous, next) = crate::schedule::navigation_targets(current);
    let title = format!("{} {}", month_label(current.month), current.year);

    let nav = format!(
        "<p class=\"monthnav\">\
         <a href=\"/schedule?month={}&amp;year={}\">&larr; {} {}</a>\
         <a href=\"/schedule?month={}&amp;year={}\">{} {} &rarr;</a></p>",
        previous.month,
        previous.year,
        month_label(previous.month),
        previous.year,
        next.month,
        next.year,
        month_label(next.month),
        next.year,
    );

    let days: String = grouped
        .iter()
        .map(|(date, shifts)| day_section(*date, shifts, current))
        .collect();
    let days = if grouped.is_empty() {
        "<p class=\"empty\">No shifts recorded for this month.</p>".to_string()
    } else {
        days
    };

    let employee_options: String = employees
        .iter()
        .map(|e| {
            let selected = if form.employee_id == e.id.to_string() {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{selected}>{}</option>",
                e.id,
                escape_html(&e.name)
            )
        })
        .collect();

    let create_form = format!(
        "<fieldset><legend>New shift</legend>\
         <form method=\"post\" action=\"/schedule/shifts\">\
         <label for=\"employee_id\">Employee</label>\
         <select id=\"employee_id\" name=\"employee_id\">\
         <option value=\"\">—</option>{employee_options}</select>\
         <label for=\"shift_date\">Date</label>\
         <input id=\"shift_date\" name=\"shift_date\" type=\"date\" value=\"{}\">\
         <label for=\"start_time\">Start</label>\
         <input id=\"start_time\" name=\"start_time\" type=\"time\" value=\"{}\">\
         <label for=\"end_time\">End</label>\
         <input id=\"end_time\" name=\"end_time\" type=\"time\" value=\"{}\">\
         {}\
         <button>Add shift</button></form></fieldset>",
        escape_html(&form.shift_date),
        escape_html(&form.start_time),
        escape_html(&form.end_time),
        month_fields(current),
    );

    let body = format!(
        "<h1>{}</h1>{nav}{}{days}{create_form}",
        escape_html(&title),
        error_list(errors)
    );
    layout(&title, "/schedule", &body)
}

fn day_section(date: NaiveDate, shifts: &[ScheduledShift], current: MonthRef) -> String {
    let rows: String = shifts
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}&ndash;{}</td><td>{}</td><td>\
                 <form class=\"inline\" method=\"post\" action=\"/schedule/shifts/{}/delete\">\
                 {}<button>Delete</button></form></td></tr>",
                s.start_time.format("%H:%M"),
                s.end_time.format("%H:%M"),
                escape_html(&s.employee_name),
                s.id,
                month_fields(current),
            )
        })
        .collect();
    format!(
        "<h3>{} ({})</h3><table>{rows}</table>",
        date.format("%Y-%m-%d"),
        date.format("%A"),
    )
}

/// Hidden fields that carry the viewed month through POST bodies
fn month_fields(current: MonthRef) -> String {
    format!(
        "<input type=\"hidden\" name=\"month\" value=\"{}\">\
         <input type=\"hidden\" name=\"year\" value=\"{}\">",
        current.month, current.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{ShiftFormDefaults, default_form_values, group_by_date};
    use chrono::NaiveTime;
    use shared::models::EmploymentType;

    fn sample_shift() -> ScheduledShift {
        ScheduledShift {
            id: 9,
            employee_id: 1,
            employee_name: "Ana".to_string(),
            shift_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }

    fn sample_employee() -> Employee {
        Employee {
            id: 1,
            name: "Ana".to_string(),
            email: None,
            employment_type: EmploymentType::FullTime,
            hours_per_month: None,
            department_id: None,
            department_name: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_page_navigation_and_rows() {
        let current = MonthRef { year: 2024, month: 1 };
        let grouped = group_by_date(vec![sample_shift()]);
        let form = ShiftForm::seeded(
            &ShiftFormDefaults {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                start_time: "09:00",
                end_time: "17:00",
            },
            current,
        );
        let html = page(current, &grouped, &[sample_employee()], &form, &[]);

        assert!(html.contains("January 2024"));
        assert!(html.contains("/schedule?month=12&amp;year=2023"));
        assert!(html.contains("/schedule?month=2&amp;year=2024"));
        assert!(html.contains("09:00&ndash;17:00"));
        assert!(html.contains("/schedule/shifts/9/delete"));
        assert!(html.contains("value=\"2024-01-01\""));
    }

    #[test]
    fn test_page_empty_month() {
        let current = MonthRef { year: 2024, month: 2 };
        let form = ShiftForm::seeded(&default_form_values(current), current);
        let html = page(current, &BTreeMap::new(), &[], &form, &[]);
        assert!(html.contains("No shifts recorded for this month."));
    }
}

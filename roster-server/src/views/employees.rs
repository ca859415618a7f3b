//! Employee list and form screens

use shared::models::{Department, Employee, EmploymentType};
use shared::util::escape_html;

use super::{error_list, layout};
use crate::forms::EmployeeForm;

pub fn list_page(employees: &[Employee]) -> String {
    let rows: String = employees
        .iter()
        .map(|e| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><a href=\"/employees/{id}/edit\">Edit</a> \
                 <form class=\"inline\" method=\"post\" action=\"/employees/{id}/delete\">\
                 <button>Delete</button></form></td></tr>",
                escape_html(&e.name),
                escape_html(e.email.as_deref().unwrap_or("")),
                e.employment_type.label(),
                e.hours_per_month
                    .map(|h| h.to_string())
                    .unwrap_or_default(),
                escape_html(e.department_name.as_deref().unwrap_or("—")),
                id = e.id
            )
        })
        .collect();

    let table = if employees.is_empty() {
        "<p class=\"empty\">No employees yet.</p>".to_string()
    } else {
        format!(
            "<table><tr><th>Name</th><th>Email</th><th>Type</th>\
             <th>Hours/month</th><th>Department</th><th></th></tr>{rows}</table>"
        )
    };

    let body = format!(
        "<h1>Employees</h1><p><a href=\"/employees/new\">Add employee</a></p>{table}"
    );
    layout("Employees", "/employees", &body)
}

/// Shared form screen for create and edit. `form` carries the raw
/// submitted (or prefilled) values so nothing is lost on redisplay.
pub fn form_page(
    title: &str,
    action: &str,
    form: &EmployeeForm,
    departments: &[Department],
    errors: &[String],
) -> String {
    let type_options: String = [EmploymentType::FullTime, EmploymentType::PartTime]
        .iter()
        .map(|ty| {
            let selected = if form.employment_type == ty.as_str() {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{selected}>{}</option>",
                ty.as_str(),
                ty.label()
            )
        })
        .collect();

    let department_options: String = departments
        .iter()
        .map(|d| {
            let selected = if form.department_id == d.id.to_string() {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{selected}>{}</option>",
                d.id,
                escape_html(&d.name)
            )
        })
        .collect();

    let body = format!(
        "<h1>{}</h1>{}\
         <fieldset><form method=\"post\" action=\"{}\">\
         <label for=\"name\">Name</label>\
         <input id=\"name\" name=\"name\" value=\"{}\">\
         <label for=\"email\">Email</label>\
         <input id=\"email\" name=\"email\" value=\"{}\">\
         <label for=\"employment_type\">Employment type</label>\
         <select id=\"employment_type\" name=\"employment_type\">{type_options}</select>\
         <label for=\"hours_per_month\">Hours per month</label>\
         <input id=\"hours_per_month\" name=\"hours_per_month\" value=\"{}\">\
         <label for=\"department_id\">Department</label>\
         <select id=\"department_id\" name=\"department_id\">\
         <option value=\"\">—</option>{department_options}</select>\
         <button>Save</button></form></fieldset>",
        escape_html(title),
        error_list(errors),
        escape_html(action),
        escape_html(&form.name),
        escape_html(&form.email),
        escape_html(&form.hours_per_month),
    );
    layout(title, "/employees", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            email: Some("a@b.co".to_string()),
            employment_type: EmploymentType::PartTime,
            hours_per_month: None,
            department_id: None,
            department_name: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_list_page() {
        let html = list_page(&[employee(5, "Ana")]);
        assert!(html.contains("Ana"));
        assert!(html.contains("Part-time"));
        assert!(html.contains("/employees/5/edit"));
        assert!(html.contains("/employees/5/delete"));
    }

    #[test]
    fn test_form_page_preselects_values() {
        let form = EmployeeForm {
            name: "Ana".to_string(),
            email: String::new(),
            employment_type: "part_time".to_string(),
            hours_per_month: "80".to_string(),
            department_id: "2".to_string(),
        };
        let departments = vec![
            Department { id: 1, name: "Sales".to_string(), created_at: 0 },
            Department { id: 2, name: "Support".to_string(), created_at: 0 },
        ];
        let html = form_page("Edit employee", "/employees/5", &form, &departments, &[]);
        assert!(html.contains("<option value=\"part_time\" selected>"));
        assert!(html.contains("<option value=\"2\" selected>Support</option>"));
        assert!(html.contains("value=\"80\""));
    }
}

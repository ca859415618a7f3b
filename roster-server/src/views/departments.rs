//! Department list + creation form

use shared::models::Department;
use shared::util::escape_html;

use super::{error_list, layout};

/// The departments screen: list, delete buttons, and the creation form.
/// `form_name` carries the submitted name back on validation failure.
pub fn page(departments: &[Department], form_name: &str, errors: &[String]) -> String {
    let rows: String = departments
        .iter()
        .map(|d| {
            format!(
                "<tr><td>{}</td><td>\
                 <form class=\"inline\" method=\"post\" action=\"/departments/{}/delete\">\
                 <button>Delete</button></form></td></tr>",
                escape_html(&d.name),
                d.id
            )
        })
        .collect();

    let table = if departments.is_empty() {
        "<p class=\"empty\">No departments yet.</p>".to_string()
    } else {
        format!("<table><tr><th>Name</th><th></th></tr>{rows}</table>")
    };

    let body = format!(
        "<h1>Departments</h1>{}{table}\
         <fieldset><legend>New department</legend>\
         <form method=\"post\" action=\"/departments\">\
         <label for=\"name\">Name</label>\
         <input id=\"name\" name=\"name\" value=\"{}\">\
         <button>Create</button></form></fieldset>",
        error_list(errors),
        escape_html(form_name)
    );
    layout("Departments", "/departments", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn department(id: i64, name: &str) -> Department {
        Department {
            id,
            name: name.to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn test_page_lists_departments() {
        let html = page(&[department(1, "Sales"), department(2, "Kitchen & Bar")], "", &[]);
        assert!(html.contains("Sales"));
        assert!(html.contains("Kitchen &amp; Bar"));
        assert!(html.contains("/departments/1/delete"));
    }

    #[test]
    fn test_page_preserves_submitted_name() {
        let html = page(&[], "  ", &["name must not be empty".to_string()]);
        assert!(html.contains("name must not be empty"));
        assert!(html.contains("No departments yet."));
    }
}

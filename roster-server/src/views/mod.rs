//! HTML rendering for the admin screens
//!
//! Plain string assembly, no template engine. Every dynamic value goes
//! through `escape_html` before interpolation.

pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod schedule;

use http::StatusCode;
use shared::util::escape_html;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f6f8;color:#222}\
nav{background:#27455c;padding:0 1.5rem}\
nav a{display:inline-block;color:#e8eef3;text-decoration:none;padding:.9rem 1rem}\
nav a.active{background:#1b3245;font-weight:600}\
main{max-width:60rem;margin:1.5rem auto;padding:0 1rem}\
h1{font-size:1.4rem}\
table{border-collapse:collapse;width:100%;background:#fff}\
th,td{border:1px solid #d6dade;padding:.45rem .6rem;text-align:left}\
th{background:#eef1f4}\
form.inline{display:inline}\
fieldset{background:#fff;border:1px solid #d6dade;margin-top:1.5rem;padding:1rem}\
label{display:block;margin:.5rem 0 .15rem}\
input,select{padding:.3rem;max-width:20rem}\
button{margin-top:.7rem;padding:.35rem .9rem;cursor:pointer}\
ul.errors{background:#fbe9e9;border:1px solid #d9534f;color:#a94442;padding:.7rem .7rem .7rem 2rem}\
p.empty{color:#667}\
.counts{display:flex;gap:1rem}\
.counts div{background:#fff;border:1px solid #d6dade;padding:1rem 1.4rem}\
.counts strong{display:block;font-size:1.6rem}\
.monthnav a{margin-right:.8rem}";

/// Wrap a page body in the shared chrome (nav bar + stylesheet)
pub fn layout(title: &str, active: &str, body: &str) -> String {
    let links = [
        ("/", "Dashboard"),
        ("/departments", "Departments"),
        ("/employees", "Employees"),
        ("/schedule", "Schedule"),
    ];
    let nav: String = links
        .iter()
        .map(|(href, label)| {
            let class = if *href == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{href}\"{class}>{label}</a>")
        })
        .collect();

    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{} — Roster</title><style>{STYLE}</style></head>\
         <body><nav>{nav}</nav><main>{body}</main></body></html>",
        escape_html(title)
    )
}

/// Minimal error page (404 fallback, unhandled service errors)
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = status.as_u16().to_string();
    let body = format!(
        "<h1>{} {}</h1><p>{}</p><p><a href=\"/\">Back to the dashboard</a></p>",
        status.as_u16(),
        escape_html(status.canonical_reason().unwrap_or("Error")),
        escape_html(message)
    );
    layout(&title, "", &body)
}

/// Validation/conflict feedback block; empty input renders nothing
pub(crate) fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape_html(e)))
        .collect();
    format!("<ul class=\"errors\">{items}</ul>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_marks_active_nav() {
        let html = layout("Employees", "/employees", "<p>x</p>");
        assert!(html.contains("<a href=\"/employees\" class=\"active\">Employees</a>"));
        assert!(html.contains("<a href=\"/departments\">Departments</a>"));
    }

    #[test]
    fn test_error_list_escapes() {
        let html = error_list(&["<script>".to_string()]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_error_list_empty() {
        assert_eq!(error_list(&[]), "");
    }

    #[test]
    fn test_error_page_contains_status() {
        let html = error_page(StatusCode::NOT_FOUND, "page not found");
        assert!(html.contains("404"));
        assert!(html.contains("page not found"));
    }
}

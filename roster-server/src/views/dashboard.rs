//! Dashboard view

use shared::util::escape_html;

use super::layout;

pub fn page(employee_count: i64, department_count: i64, shifts_this_month: i64, month: &str) -> String {
    let body = format!(
        "<h1>Dashboard</h1>\
         <div class=\"counts\">\
         <div><strong>{employee_count}</strong>employees</div>\
         <div><strong>{department_count}</strong>departments</div>\
         <div><strong>{shifts_this_month}</strong>shifts in {}</div>\
         </div>",
        escape_html(month)
    );
    layout("Dashboard", "/", &body)
}

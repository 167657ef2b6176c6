// src/export/model.rs

use crate::models::Employee;
use serde::Serialize;

/// Flat employee shape shared by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EmployeeExport {
    pub id: usize,
    pub name: String,
    pub position: String,
    pub project: String,
    pub salary: f64,
    pub hours_worked: f64,
    pub hourly_rate: f64,
    pub pay_due: f64,
}

impl EmployeeExport {
    /// `id` is the 1-based position in the collection, as shown by `list`.
    pub fn from_employee(id: usize, e: &Employee) -> Self {
        Self {
            id,
            name: e.name().to_string(),
            position: e.position().to_string(),
            project: e.project().to_string(),
            salary: e.salary(),
            hours_worked: e.hours_worked(),
            hourly_rate: (e.hourly_rate() * 100.0).round() / 100.0,
            pay_due: e.calculate_pay(),
        }
    }
}

/// Header for XLSX, same order as the serialized fields.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "name",
        "position",
        "project",
        "salary",
        "hours_worked",
        "hourly_rate",
        "pay_due",
    ]
}

/// Typed cell value for the spreadsheet writer.
pub(crate) enum Cell {
    Text(String),
    Number(f64),
}

pub(crate) fn employee_to_row(e: &EmployeeExport) -> Vec<Cell> {
    vec![
        Cell::Number(e.id as f64),
        Cell::Text(e.name.clone()),
        Cell::Text(e.position.clone()),
        Cell::Text(e.project.clone()),
        Cell::Number(e.salary),
        Cell::Number(e.hours_worked),
        Cell::Number(e.hourly_rate),
        Cell::Number(e.pay_due),
    ]
}

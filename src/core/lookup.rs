use crate::errors::{AppError, AppResult};
use crate::models::Employee;

/// Resolve an employee key to an index in the collection.
///
/// The key is either the 1-based number shown by `list` or the employee name
/// (case-insensitive). A name shared by several employees is rejected.
pub fn resolve_employee(employees: &[Employee], key: &str) -> AppResult<usize> {
    let key = key.trim();

    if let Ok(n) = key.parse::<usize>() {
        return if n >= 1 && n <= employees.len() {
            Ok(n - 1)
        } else {
            Err(AppError::EmployeeNotFound(format!(
                "#{n} (there are {} employees)",
                employees.len()
            )))
        };
    }

    let wanted = key.to_lowercase();
    let mut matches = employees
        .iter()
        .enumerate()
        .filter(|(_, e)| e.name().trim().to_lowercase() == wanted)
        .map(|(i, _)| i);

    match (matches.next(), matches.next()) {
        (Some(i), None) => Ok(i),
        (Some(_), Some(_)) => Err(AppError::AmbiguousEmployee(key.to_string())),
        (None, _) => Err(AppError::EmployeeNotFound(key.to_string())),
    }
}

use crate::core::lookup::resolve_employee;
use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::storage::EmployeeStore;
use crate::storage::log::ttlog_or_warn;
use crate::ui::messages::{info, success};

/// Fields to overwrite on an existing employee. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct EmployeeEdit {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hours: Option<f64>,
    pub project: Option<String>,
}

impl EmployeeEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.salary.is_none()
            && self.hours.is_none()
            && self.project.is_none()
    }

    /// Apply every field to `emp` through the validating mutators.
    ///
    /// Stops at the first invalid field; callers apply to a copy so that a
    /// failed edit leaves the stored record untouched.
    pub fn apply_to(&self, emp: &mut Employee) -> AppResult<Vec<String>> {
        let mut changes = Vec::new();

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::InvalidArgument("employee name cannot be empty".into()));
            }
            changes.push(format!("name '{}' → '{}'", emp.name(), name));
            emp.set_name(name);
        }

        if let Some(position) = &self.position {
            changes.push(format!("position '{}' → '{}'", emp.position(), position));
            emp.set_position(position.trim());
        }

        if let Some(salary) = self.salary {
            let before = emp.salary();
            emp.set_salary(salary)?;
            changes.push(format!("salary {before} → {salary}"));
        }

        if let Some(hours) = self.hours {
            let before = emp.hours_worked();
            emp.set_hours_worked(hours)?;
            changes.push(format!("hours {before} → {hours}"));
        }

        if let Some(project) = &self.project {
            let before = emp.assign_project(project.trim());
            changes.push(format!("project '{}' → '{}'", before, emp.project()));
        }

        Ok(changes)
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Edit one employee as a single transaction: either every field is
    /// applied and saved, or nothing is.
    pub fn apply(store: &EmployeeStore, key: &str, edit: &EmployeeEdit) -> AppResult<Employee> {
        let mut employees = store.try_load_all()?;
        let idx = resolve_employee(&employees, key)?;

        if edit.is_empty() {
            info("Nothing to edit.");
            return Ok(employees[idx].clone());
        }

        let mut updated = employees[idx].clone();
        let changes = edit.apply_to(&mut updated)?;

        let target = employees[idx].name().to_string();
        employees[idx] = updated.clone();
        store.save_all(&employees)?;

        let message = changes.join(", ");
        ttlog_or_warn(&store.log_path(), "edit", &target, &message);
        success(format!("Employee {} updated: {}", target, message));

        Ok(updated)
    }
}

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::storage::EmployeeStore;
use crate::storage::log::ttlog_or_warn;
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Create a new employee, append it to the collection and save.
    ///
    /// Missing position and salary fall back to the configured defaults.
    pub fn apply(
        store: &EmployeeStore,
        cfg: &Config,
        name: &str,
        position: Option<&str>,
        salary: Option<f64>,
        project: Option<&str>,
    ) -> AppResult<Employee> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidArgument("employee name cannot be empty".into()));
        }

        let position = position
            .map(str::trim)
            .unwrap_or(cfg.default_position.as_str());
        let salary = salary.unwrap_or(cfg.default_salary);

        let mut emp = Employee::new(name, position, salary)?;

        if let Some(p) = project.map(str::trim).filter(|p| !p.is_empty()) {
            if !cfg.projects.iter().any(|known| known == p) {
                warning(format!("Project '{p}' is not in the configured project list."));
            }
            emp.assign_project(p);
        }

        let mut employees = store.try_load_all()?;
        employees.push(emp.clone());
        store.save_all(&employees)?;

        ttlog_or_warn(
            &store.log_path(),
            "add",
            emp.name(),
            &format!(
                "Added {} ({}), salary {}, project '{}'",
                emp.name(),
                emp.position(),
                emp.salary(),
                emp.project()
            ),
        );

        success(format!(
            "Employee #{} {} added ({}, project '{}').",
            employees.len(),
            emp.name(),
            emp.position(),
            emp.project()
        ));

        Ok(emp)
    }
}

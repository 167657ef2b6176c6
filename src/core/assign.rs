use crate::config::Config;
use crate::core::lookup::resolve_employee;
use crate::errors::{AppError, AppResult};
use crate::storage::EmployeeStore;
use crate::storage::log::ttlog_or_warn;
use crate::ui::messages::{success, warning};

pub struct AssignLogic;

impl AssignLogic {
    /// Move an employee to `project` and save. Returns the previous project.
    ///
    /// Projects missing from the configured list are accepted with a warning.
    pub fn apply(
        store: &EmployeeStore,
        cfg: &Config,
        key: &str,
        project: &str,
    ) -> AppResult<String> {
        let project = project.trim();
        if project.is_empty() {
            return Err(AppError::InvalidArgument("project name cannot be empty".into()));
        }

        let mut employees = store.try_load_all()?;
        let idx = resolve_employee(&employees, key)?;

        if !cfg.projects.iter().any(|p| p == project) {
            warning(format!(
                "Project '{project}' is not in the configured project list."
            ));
        }

        let emp = &mut employees[idx];
        let previous = emp.assign_project(project);
        let name = emp.name().to_string();

        store.save_all(&employees)?;

        let message = format!("{name} moved from project '{previous}' to '{project}'.");
        ttlog_or_warn(&store.log_path(), "assign", &name, &message);
        success(message);

        Ok(previous)
    }
}

use crate::core::lookup::resolve_employee;
use crate::errors::AppResult;
use crate::models::Employee;
use crate::storage::EmployeeStore;
use crate::storage::log::ttlog_or_warn;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Name of the employee `key` points to, for the confirmation prompt.
    pub fn preview(store: &EmployeeStore, key: &str) -> AppResult<String> {
        let employees = store.try_load_all()?;
        let idx = resolve_employee(&employees, key)?;
        Ok(employees[idx].name().to_string())
    }

    /// Remove one employee from the collection and save.
    pub fn apply(store: &EmployeeStore, key: &str) -> AppResult<Employee> {
        let mut employees = store.try_load_all()?;
        let idx = resolve_employee(&employees, key)?;

        let removed = employees.remove(idx);
        store.save_all(&employees)?;

        ttlog_or_warn(
            &store.log_path(),
            "del",
            removed.name(),
            &format!("Deleted {} ({})", removed.name(), removed.position()),
        );
        info(format!("Deleted employee {}", removed.name()));

        Ok(removed)
    }

    /// Remove the whole employees file. Returns `false` when it did not exist.
    pub fn clear(store: &EmployeeStore) -> AppResult<bool> {
        let removed = store.clear()?;

        if removed {
            ttlog_or_warn(
                &store.log_path(),
                "clear",
                "all",
                &format!("Removed {}", store.path().display()),
            );
        }

        Ok(removed)
    }
}

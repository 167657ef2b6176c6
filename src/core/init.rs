use crate::errors::AppResult;
use crate::models::Employee;
use crate::storage::EmployeeStore;
use crate::storage::log::ttlog_or_warn;

/// Demo staff used by `init --sample`: (name, position, salary, hours, project).
const SAMPLE: [(&str, &str, f64, f64, &str); 3] = [
    ("Ivan", "Developer", 100_000.0, 160.0, "Company website"),
    ("Maria", "Designer", 80_000.0, 120.0, "Mobile app"),
    ("Alexei", "Tester", 70_000.0, 140.0, "Testing"),
];

pub struct InitLogic;

impl InitLogic {
    /// Make sure the employees file exists. With `sample`, an empty store is
    /// seeded with the demo staff. Returns the number of employees on file.
    pub fn apply(store: &EmployeeStore, sample: bool) -> AppResult<usize> {
        let mut employees = store.try_load_all()?;

        if sample && employees.is_empty() {
            employees = sample_employees()?;
            store.save_all(&employees)?;
            ttlog_or_warn(
                &store.log_path(),
                "init",
                "sample",
                &format!("Seeded {} sample employees", employees.len()),
            );
        } else if !store.exists() {
            store.save_all(&employees)?;
            ttlog_or_warn(
                &store.log_path(),
                "init",
                &store.path().display().to_string(),
                "Employees file created",
            );
        }

        Ok(employees.len())
    }
}

pub fn sample_employees() -> AppResult<Vec<Employee>> {
    SAMPLE
        .iter()
        .map(|&(name, position, salary, hours, project)| {
            let mut emp = Employee::new(name, position, salary)?;
            emp.add_hours(hours)?;
            emp.assign_project(project);
            Ok(emp)
        })
        .collect()
}

use crate::core::lookup::resolve_employee;
use crate::errors::{AppError, AppResult};
use crate::storage::EmployeeStore;
use crate::storage::log::ttlog_or_warn;
use crate::ui::messages::{info, success};
use crate::utils::formatting::hours as fmt_hours;

/// Hours bookkeeping: add worked hours, close the pay period.
pub struct HoursLogic;

impl HoursLogic {
    /// Add `hours` to one employee and save. Returns the new total.
    ///
    /// Nothing is written when `hours` is rejected.
    pub fn add(store: &EmployeeStore, key: &str, hours: f64) -> AppResult<f64> {
        let mut employees = store.try_load_all()?;
        let idx = resolve_employee(&employees, key)?;

        let emp = &mut employees[idx];
        let total = emp.add_hours(hours)?;
        let name = emp.name().to_string();

        store.save_all(&employees)?;

        let message = format!(
            "Added {} h to {}. Total: {} h",
            fmt_hours(hours),
            name,
            fmt_hours(total)
        );
        ttlog_or_warn(&store.log_path(), "hours", &name, &message);
        success(message);

        Ok(total)
    }

    /// Reset hours to zero for one employee (`key`) or for everybody (`all`).
    ///
    /// Returns how many employees were reset.
    pub fn reset(store: &EmployeeStore, key: Option<&str>, all: bool) -> AppResult<usize> {
        let mut employees = store.try_load_all()?;

        let targets: Vec<usize> = match (key, all) {
            (_, true) => (0..employees.len()).collect(),
            (Some(k), false) => vec![resolve_employee(&employees, k)?],
            (None, false) => {
                return Err(AppError::InvalidArgument(
                    "specify an employee or use --all".into(),
                ));
            }
        };

        if targets.is_empty() {
            info("No employees to reset.");
            return Ok(0);
        }

        let mut closed = Vec::with_capacity(targets.len());
        for &i in &targets {
            let emp = &mut employees[i];
            let cleared = emp.reset_hours();
            closed.push((
                emp.name().to_string(),
                format!(
                    "Pay period closed for {}: {} h cleared",
                    emp.name(),
                    fmt_hours(cleared)
                ),
            ));
        }

        store.save_all(&employees)?;

        for (name, message) in closed {
            ttlog_or_warn(&store.log_path(), "reset", &name, &message);
            info(message);
        }
        success(format!("Hours reset for {} employee(s).", targets.len()));

        Ok(targets.len())
    }
}

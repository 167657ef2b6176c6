use crate::errors::{AppError, AppResult};

/// Standard working hours in one pay period.
pub const STANDARD_HOURS: f64 = 160.0;

/// Project assigned to a newly created employee.
pub const UNASSIGNED_PROJECT: &str = "unassigned";

/// One worker: identity, monthly salary, hours accumulated in the current pay
/// period and the current project.
///
/// Fields are private: every change goes through a mutator that keeps
/// `salary > 0` and `hours_worked >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    name: String,
    position: String,
    salary: f64,
    hours_worked: f64,
    project: String,
}

impl Employee {
    /// Create a new employee with zero hours and no project.
    ///
    /// Fails with `InvalidArgument` when `salary` is not a positive number.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
    ) -> AppResult<Self> {
        validate_salary(salary)?;

        Ok(Self {
            name: name.into(),
            position: position.into(),
            salary,
            hours_worked: 0.0,
            project: UNASSIGNED_PROJECT.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn hours_worked(&self) -> f64 {
        self.hours_worked
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Add worked hours and return the new total.
    pub fn add_hours(&mut self, hours: f64) -> AppResult<f64> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::InvalidArgument(format!(
                "hours must be a positive number, got {hours}"
            )));
        }

        self.hours_worked += hours;
        Ok(self.hours_worked)
    }

    /// Pay due for the hours worked so far, rounded to two decimals.
    pub fn calculate_pay(&self) -> f64 {
        round2(self.hourly_rate() * self.hours_worked)
    }

    /// Monthly salary spread over the standard hours of a pay period.
    pub fn hourly_rate(&self) -> f64 {
        self.salary / STANDARD_HOURS
    }

    /// Move the employee to another project and return the previous one.
    pub fn assign_project(&mut self, project: impl Into<String>) -> String {
        std::mem::replace(&mut self.project, project.into())
    }

    /// Close the pay period: hours go back to zero. Returns the cleared hours.
    pub fn reset_hours(&mut self) -> f64 {
        std::mem::replace(&mut self.hours_worked, 0.0)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_position(&mut self, position: impl Into<String>) {
        self.position = position.into();
    }

    pub fn set_salary(&mut self, salary: f64) -> AppResult<()> {
        validate_salary(salary)?;
        self.salary = salary;
        Ok(())
    }

    pub fn set_hours_worked(&mut self, hours: f64) -> AppResult<()> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::InvalidArgument(format!(
                "hours worked cannot be negative, got {hours}"
            )));
        }
        self.hours_worked = hours;
        Ok(())
    }
}

fn validate_salary(salary: f64) -> AppResult<()> {
    if !salary.is_finite() || salary <= 0.0 {
        return Err(AppError::InvalidArgument(format!(
            "salary must be a positive number, got {salary}"
        )));
    }
    Ok(())
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

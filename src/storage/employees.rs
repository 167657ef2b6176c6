//! CSV persistence for the employee collection.

use crate::errors::{AppError, AppResult};
use crate::models::{Employee, UNASSIGNED_PROJECT};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Column order of the employees file.
pub const HEADERS: [&str; 6] = ["Name", "Position", "Salary", "Hours", "PayDue", "Project"];

/// One line of the employees file.
///
/// `PayDue` is written for whoever opens the file by hand and is never read back.
#[derive(Debug, Serialize, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Salary")]
    salary: f64,
    #[serde(rename = "Hours")]
    hours: f64,
    #[serde(rename = "PayDue", skip_deserializing)]
    pay_due: f64,
    #[serde(rename = "Project", default)]
    project: Option<String>,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        Self {
            name: e.name().to_string(),
            position: e.position().to_string(),
            salary: e.salary(),
            hours: e.hours_worked(),
            pay_due: e.calculate_pay(),
            project: Some(e.project().to_string()),
        }
    }
}

impl EmployeeRow {
    fn into_employee(self) -> AppResult<Employee> {
        let mut emp = Employee::new(self.name, self.position, self.salary)?;
        emp.set_hours_worked(self.hours)?;

        match self.project {
            Some(p) if !p.trim().is_empty() => {
                emp.assign_project(p);
            }
            _ => {
                emp.assign_project(UNASSIGNED_PROJECT);
            }
        }

        Ok(emp)
    }
}

/// Persistence adapter bound to a single employees file.
///
/// The store never keeps employees around: every call reads or writes the
/// whole collection.
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    path: PathBuf,
}

impl EmployeeStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Activity log living next to the data file (`employees.csv` → `employees.log`).
    pub fn log_path(&self) -> PathBuf {
        self.path.with_extension("log")
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Overwrite the employees file with the given collection.
    pub fn save_all(&self, employees: &[Employee]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| write_err(&self.path, e))?;
        }

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| write_err(&self.path, e))?;

        wtr.write_record(HEADERS).map_err(|e| write_err(&self.path, e))?;

        for emp in employees {
            wtr.serialize(EmployeeRow::from(emp))
                .map_err(|e| write_err(&self.path, e))?;
        }

        wtr.flush().map_err(|e| write_err(&self.path, e))?;
        Ok(())
    }

    /// Load every employee, failing on the first unreadable row.
    ///
    /// A missing file is an empty collection, not an error.
    pub fn try_load_all(&self) -> AppResult<Vec<Employee>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&self.path)
            .map_err(|e| read_err(&self.path, e))?;

        let mut employees = Vec::new();
        for (i, row) in rdr.deserialize::<EmployeeRow>().enumerate() {
            let row = row.map_err(|e| read_err(&self.path, e))?;
            let emp = row
                .into_employee()
                .map_err(|e| read_err(&self.path, format!("row {}: {}", i + 1, e)))?;
            employees.push(emp);
        }

        Ok(employees)
    }

    /// Load every employee, falling back to an empty collection on any failure.
    pub fn load_all(&self) -> Vec<Employee> {
        match self.try_load_all() {
            Ok(employees) => employees,
            Err(e) => {
                warning(format!("{e}. Starting with an empty employee list."));
                Vec::new()
            }
        }
    }

    /// Remove the employees file. Returns `false` when there was nothing to remove.
    pub fn clear(&self) -> AppResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        fs::remove_file(&self.path).map_err(|e| write_err(&self.path, e))?;
        Ok(true)
    }
}

fn read_err(path: &Path, e: impl Display) -> AppError {
    AppError::StorageRead(format!("{}: {}", path.display(), e))
}

fn write_err(path: &Path, e: impl Display) -> AppError {
    AppError::StorageWrite(format!("{}: {}", path.display(), e))
}

// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{EmployeeExport, ExportFormat};
use crate::models::Employee;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the employee collection to `file` in the given format.
    ///
    /// Returns `false` when there was nothing to export.
    pub fn export(
        employees: &[Employee],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<bool> {
        let path = Path::new(file);

        if employees.is_empty() {
            warning("No employees to export.");
            return Ok(false);
        }

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let rows = Self::rows(employees);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(true)
    }

    pub fn rows(employees: &[Employee]) -> Vec<EmployeeExport> {
        employees
            .iter()
            .enumerate()
            .map(|(i, e)| EmployeeExport::from_employee(i + 1, e))
            .collect()
    }
}

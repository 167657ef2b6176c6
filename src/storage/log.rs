use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use chrono::Local;
use std::fs::OpenOptions;
use std::path::Path;

/// Column order of the activity log.
pub const LOG_HEADERS: [&str; 4] = ["date", "operation", "target", "message"];

/// Append an internal log line to the activity log next to the employees file.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    let is_new = !path.exists();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let csv_err = |e: csv::Error| AppError::StorageWrite(format!("{}: {}", path.display(), e));

    if is_new {
        wtr.write_record(LOG_HEADERS).map_err(csv_err)?;
    }

    wtr.write_record([now.as_str(), operation, target, message])
        .map_err(csv_err)?;
    wtr.flush()?;

    Ok(())
}

/// Same as [`ttlog`], but a failure only prints a warning.
pub fn ttlog_or_warn(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(path, operation, target, message) {
        warning(format!("Failed to write activity log: {e}"));
    }
}

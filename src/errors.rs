//! Unified application error type.
//! All modules (models, storage, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Model validation
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Failed to read employee data: {0}")]
    StorageRead(String),

    #[error("Failed to write employee data: {0}")]
    StorageWrite(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("More than one employee matches '{0}', use the list number instead")]
    AmbiguousEmployee(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

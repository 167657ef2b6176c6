//! File-backed storage: the employees CSV, the generic table reader and the
//! activity log.

pub mod employees;
pub mod log;
pub mod table;

pub use employees::EmployeeStore;
pub use table::{CsvTable, read_table};

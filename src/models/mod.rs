pub mod employee;

pub use employee::{Employee, STANDARD_HOURS, UNASSIGNED_PROJECT};

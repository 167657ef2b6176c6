//! Business logic behind every command. Each operation loads the collection
//! from the store, applies one change and saves it back.

pub mod add;
pub mod assign;
pub mod backup;
pub mod chart;
pub mod config;
pub mod del;
pub mod edit;
pub mod hours;
pub mod init;
pub mod list;
pub mod log;
pub mod lookup;

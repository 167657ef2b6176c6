pub mod add;
pub mod assign;
pub mod backup;
pub mod chart;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod hours;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;

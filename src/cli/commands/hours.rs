use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hours::HoursLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { employee, hours } = cmd {
        let store = EmployeeStore::new(cfg.data_path());
        HoursLogic::add(&store, employee, hours.unwrap_or(cfg.default_hours))?;
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::hours::HoursLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;
use crate::ui::messages::{confirm, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { employee, all } = cmd {
        if *all && !confirm("Reset worked hours for ALL employees?") {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = EmployeeStore::new(cfg.data_path());
        HoursLogic::reset(&store, employee.as_deref(), *all)?;
    }

    Ok(())
}

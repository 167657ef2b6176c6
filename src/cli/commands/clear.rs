use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let store = EmployeeStore::new(cfg.data_path());

        if !*yes && !confirm("Delete ALL employee data? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        if DeleteLogic::clear(&store)? {
            success(format!("Removed {}", store.path().display()));
        } else {
            info("Nothing to clear.");
        }
    }

    Ok(())
}

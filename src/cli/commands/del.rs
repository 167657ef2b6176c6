use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { employee, yes } = cmd {
        let store = EmployeeStore::new(cfg.data_path());

        if !*yes {
            let name = DeleteLogic::preview(&store, employee)?;
            if !confirm(&format!("Delete employee {name}? This action is irreversible.")) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&store, employee)?;
        success(format!("Employee {} has been deleted.", removed.name()));
    }

    Ok(())
}

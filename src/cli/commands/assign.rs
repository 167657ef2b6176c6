use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assign::AssignLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assign { employee, project } = cmd {
        let store = EmployeeStore::new(cfg.data_path());
        AssignLogic::apply(&store, cfg, employee, project)?;
    }

    Ok(())
}

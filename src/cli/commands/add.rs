use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;

/// Add a new employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        position,
        salary,
        project,
    } = cmd
    {
        let store = EmployeeStore::new(cfg.data_path());
        AddLogic::apply(
            &store,
            cfg,
            name,
            position.as_deref(),
            *salary,
            project.as_deref(),
        )?;
    }

    Ok(())
}

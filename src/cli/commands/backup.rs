use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = EmployeeStore::new(cfg.data_path());
        BackupLogic::backup(&store, file, *compress, *force)?;
    }

    Ok(())
}

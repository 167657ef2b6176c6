use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::storage::EmployeeStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = EmployeeStore::new(cfg.data_path());
        ExportLogic::export(&store.load_all(), *format, file, *force)?;
    }
    Ok(())
}

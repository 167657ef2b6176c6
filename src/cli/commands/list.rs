use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { raw } = cmd {
        let store = EmployeeStore::new(cfg.data_path());

        if *raw {
            ListLogic::print_raw(&store);
        } else {
            ListLogic::print(&store.load_all(), cfg);
        }
    }

    Ok(())
}

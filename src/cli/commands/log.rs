use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        let store = EmployeeStore::new(cfg.data_path());

        if *print {
            LogLogic::print_log(&store);
        } else {
            info(format!(
                "Activity log: {} (use --print to show it)",
                store.log_path().display()
            ));
        }
    }

    Ok(())
}

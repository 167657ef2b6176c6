use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::init::InitLogic;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the employees CSV file, optionally seeded with demo staff
pub fn handle(cli: &Cli) -> AppResult<()> {
    let sample = matches!(cli.command, Commands::Init { sample: true });

    let cfg = Config::init_all(cli.data.as_deref(), cli.test)?;

    info("Initializing rstaffhours…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Employees   : {}", cfg.data_path().display());

    let store = EmployeeStore::new(cfg.data_path());
    let count = InitLogic::apply(&store, sample)?;

    success(format!(
        "rstaffhours initialization completed ({count} employee(s) on file)."
    ));
    Ok(())
}

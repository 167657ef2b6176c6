use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::ChartBuilder;
use crate::errors::AppResult;
use crate::storage::EmployeeStore;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { width } = cmd {
        let store = EmployeeStore::new(cfg.data_path());
        let employees = store.load_all();

        if employees.is_empty() {
            info("No data to display.");
            return Ok(());
        }

        let chart = ChartBuilder::create_payment_chart(&employees, &cfg.currency)?;
        header("Statistics");
        print!("{}", chart.render(width.unwrap_or(cfg.chart_width).max(1)));
    }

    Ok(())
}

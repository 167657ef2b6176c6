use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EmployeeEdit};
use crate::errors::AppResult;
use crate::storage::EmployeeStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        employee,
        name,
        position,
        salary,
        hours,
        project,
    } = cmd
    {
        let edit = EmployeeEdit {
            name: name.clone(),
            position: position.clone(),
            salary: *salary,
            hours: *hours,
            project: project.clone(),
        };

        let store = EmployeeStore::new(cfg.data_path());
        EditLogic::apply(&store, employee, &edit)?;
    }

    Ok(())
}

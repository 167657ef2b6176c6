use crate::config::Config;
use crate::models::Employee;
use crate::storage::{EmployeeStore, read_table};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_pay};
use crate::utils::formatting::{bold, hours as fmt_hours, money};
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    /// Build the employee overview table.
    pub fn build_table(employees: &[Employee]) -> Table {
        let mut table = Table::new(vec![
            Column::right("#"),
            Column::left("Name"),
            Column::left("Position"),
            Column::left("Project"),
            Column::right("Salary"),
            Column::right("Hours"),
            Column::right("Rate/h"),
            Column::right("Pay due"),
        ]);

        for (i, e) in employees.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                e.name().to_string(),
                e.position().to_string(),
                e.project().to_string(),
                money(e.salary()),
                fmt_hours(e.hours_worked()),
                money(e.hourly_rate()),
                money(e.calculate_pay()),
            ]);
        }

        table
    }

    pub fn print(employees: &[Employee], cfg: &Config) {
        if employees.is_empty() {
            info("No employees on file. Add one with `rstaffhours add <NAME>`.");
            return;
        }

        header("Employees");
        print!("{}", Self::build_table(employees).render('-'));

        let total_hours: f64 = employees.iter().map(Employee::hours_worked).sum();
        let total_pay: f64 = employees.iter().map(Employee::calculate_pay).sum();

        println!(
            "\n{} {} employee(s), {} h, pay due {}{} {}{}",
            bold("Total:"),
            employees.len(),
            fmt_hours(total_hours),
            color_for_pay(total_pay),
            money(total_pay),
            cfg.currency,
            RESET
        );
    }

    /// Print the employees file as stored, derived `PayDue` column included.
    pub fn print_raw(store: &EmployeeStore) {
        let raw = read_table(store.path());

        if raw.headers.is_empty() {
            info(format!("No readable data in {}", store.path().display()));
            return;
        }

        let mut table = Table::new(raw.headers.iter().map(|h| Column::left(h)).collect());
        for row in raw.rows {
            table.add_row(row);
        }

        header(store.path().display());
        print!("{}", table.render('-'));
    }
}

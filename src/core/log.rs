use crate::storage::log::LOG_HEADERS;
use crate::storage::{EmployeeStore, read_table};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

const OP_TARGET_MAX: usize = 40;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "edit" | "assign" => Colour::Yellow,
        "hours" | "reset" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One printable line per activity-log entry, oldest first.
    pub fn format_entries(store: &EmployeeStore) -> Vec<String> {
        let table = read_table(store.log_path());

        let cols: Option<Vec<usize>> = LOG_HEADERS.iter().map(|h| table.column(h)).collect();
        let Some(cols) = cols else {
            return Vec::new();
        };

        let entries: Vec<(String, String, String, String)> = table
            .rows
            .iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r[cols[0]])
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or_else(|_| r[cols[0]].clone());
                (date, r[cols[1]].clone(), r[cols[2]].clone(), r[cols[3]].clone())
            })
            .collect();

        let id_w = entries.len().to_string().len();

        entries
            .into_iter()
            .enumerate()
            .map(|(i, (date, op, target, message))| {
                let colour = color_for_operation(&op);
                let mut op_target = format!("{} ({})", colour.paint(op.as_str()), target);

                // truncate on the visible text, then color the operation again
                let visible = strip_ansi(&op_target);
                if visible.chars().count() > OP_TARGET_MAX {
                    let cut: String = visible
                        .chars()
                        .skip(op.chars().count())
                        .take(OP_TARGET_MAX.saturating_sub(3 + op.chars().count()))
                        .collect();
                    op_target = format!("{}{}...", colour.paint(op.as_str()), cut);
                }

                let shown = strip_ansi(&op_target).chars().count();
                let padding = " ".repeat(OP_TARGET_MAX.saturating_sub(shown));

                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    i + 1,
                    date,
                    op_target,
                    padding,
                    message,
                    id_w = id_w
                )
            })
            .collect()
    }

    pub fn print_log(store: &EmployeeStore) {
        let lines = Self::format_entries(store);

        if lines.is_empty() {
            info(format!("Activity log is empty: {}", store.log_path().display()));
            return;
        }

        println!("📜 Activity log:\n");
        for line in lines {
            println!("{line}");
        }
    }
}

//! Two-panel terminal bar chart: pay due and hours worked per employee.

use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::utils::colors::bar_colour;
use crate::utils::formatting::{bold, group_thousands, pad_right};
use unicode_width::UnicodeWidthStr;

const BAR_CHAR: &str = "█";

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text printed after the bar.
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub bars: Vec<Bar>,
}

impl Panel {
    fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    /// Bar length in characters for `value`, scaled so the largest bar is `width` long.
    pub fn bar_len(&self, value: f64, width: usize) -> usize {
        let max = self.max_value();
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        ((value / max) * width as f64).round().max(1.0) as usize
    }

    fn render(&self, width: usize) -> String {
        let label_w = self
            .bars
            .iter()
            .map(|b| UnicodeWidthStr::width(b.label.as_str()))
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n", bold(&self.title));
        for (i, bar) in self.bars.iter().enumerate() {
            let body = BAR_CHAR.repeat(self.bar_len(bar.value, width));
            out.push_str(&format!(
                "  {} │{} {}\n",
                pad_right(&bar.label, label_w),
                bar_colour(i).paint(body),
                bar.caption
            ));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub pay: Panel,
    pub hours: Panel,
}

impl Chart {
    pub fn render(&self, width: usize) -> String {
        format!("{}\n{}", self.pay.render(width), self.hours.render(width))
    }
}

pub struct ChartBuilder;

impl ChartBuilder {
    /// Build the pay and hours panels, one bar per employee in list order.
    pub fn create_payment_chart(employees: &[Employee], currency: &str) -> AppResult<Chart> {
        if employees.is_empty() {
            return Err(AppError::InvalidArgument("employee list is empty".into()));
        }

        let pay = Panel {
            title: format!("Pay due ({currency})"),
            bars: employees
                .iter()
                .map(|e| {
                    let pay = e.calculate_pay();
                    Bar {
                        label: e.name().to_string(),
                        value: pay,
                        caption: group_thousands(pay),
                    }
                })
                .collect(),
        };

        let hours = Panel {
            title: "Hours worked (h)".to_string(),
            bars: employees
                .iter()
                .map(|e| Bar {
                    label: e.name().to_string(),
                    value: e.hours_worked(),
                    caption: (e.hours_worked().trunc() as i64).to_string(),
                })
                .collect(),
        };

        Ok(Chart { pay, hours })
    }
}

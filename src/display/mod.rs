//! Display formatting for terminal output
//!
//! List views are rendered as tables; the reports format themselves.

pub mod budget;
pub mod month;
pub mod transaction;

pub use budget::{format_budget_details, format_budget_list};
pub use month::format_month_list;
pub use transaction::{
    format_expense_details, format_expense_list, format_income_details, format_income_list,
};

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

/// Render rows with the shared table style, right-aligning the given columns
fn render_table<T: Tabled>(rows: Vec<T>, numeric_columns: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    for &column in numeric_columns {
        table.modify(Columns::single(column), Alignment::right());
    }
    table.to_string()
}

/// Format a date with a strftime pattern, falling back to ISO form when the
/// pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

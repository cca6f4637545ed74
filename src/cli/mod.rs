//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod income;
pub mod month;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use month::{handle_month_command, MonthCommands};
pub use report::{handle_dashboard_command, handle_summary_command};

use chrono::{Local, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{dates, Money, MonthClassification, MonthNum};
use crate::services::MonthService;

/// Parse a user-entered amount that must be greater than zero
fn parse_amount(input: &str) -> TrackerResult<Money> {
    let amount = Money::parse(input)
        .map_err(|e| TrackerError::Validation(format!("Invalid amount: {}", e)))?;
    if !amount.is_positive() {
        return Err(TrackerError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}

fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    dates::parse_date(input).ok_or_else(|| {
        TrackerError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", input))
    })
}

/// The given date, or today
fn date_or_today(input: Option<&str>) -> TrackerResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

/// Resolve `--month`, falling back to the month classification whose key
/// matches `date`
fn month_for(
    months: &MonthService<'_>,
    input: Option<&str>,
    date: NaiveDate,
) -> TrackerResult<MonthClassification> {
    if let Some(identifier) = input {
        return months.resolve(identifier);
    }

    let key = MonthNum::from_date(date);
    months
        .list()?
        .into_iter()
        .find(|m| m.month_num == key)
        .ok_or_else(|| {
            TrackerError::Validation(format!(
                "No month classification for {}; pass --month or run 'spendbook month current'",
                key
            ))
        })
}

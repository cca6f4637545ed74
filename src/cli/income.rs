//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_income_details, format_income_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{IncomePatch, IncomeType, NewIncome};
use crate::services::{IncomeService, MonthService};
use crate::storage::Storage;

use super::{date_or_today, month_for, parse_amount, parse_date};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record an income
    Add {
        /// Where the money came from
        name: String,
        /// Amount (e.g., "3000")
        amount: String,
        /// Salary, Refund or Other
        #[arg(short = 't', long = "type", default_value = "Salary")]
        kind: String,
        /// Month ID, key or label (default: the month matching the date)
        #[arg(short, long)]
        month: Option<String>,
        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List incomes, newest first
    #[command(alias = "ls")]
    List {
        /// Only this month (ID, key or label)
        #[arg(short, long)]
        month: Option<String>,
        /// Only this type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Edit an income
    Edit {
        /// Income ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Month ID, key or label
        #[arg(short, long)]
        month: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an income
    #[command(alias = "rm")]
    Delete {
        /// Income ID
        id: String,
    },
}

fn parse_income_type(input: &str) -> TrackerResult<IncomeType> {
    input.parse().map_err(TrackerError::Validation)
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> TrackerResult<()> {
    let service = IncomeService::new(storage);
    let month_service = MonthService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            kind,
            month,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let kind = parse_income_type(&kind)?;
            let date = date_or_today(date.as_deref())?;
            let month = month_for(&month_service, month.as_deref(), date)?;

            let income = service.create(NewIncome {
                income: name,
                amount,
                date,
                month_classification_id: month.id,
                kind,
            })?;

            println!(
                "Recorded income: {} {} ({}, {})",
                income.income,
                income.amount.format_with_symbol(currency),
                income.kind,
                month.month
            );
            println!("  ID: {}", income.id);
        }

        IncomeCommands::List { month, kind } => {
            let month_id = month
                .as_deref()
                .map(|m| month_service.resolve(m))
                .transpose()?
                .map(|m| m.id);
            let kind = kind.as_deref().map(parse_income_type).transpose()?;

            let incomes = service.list(month_id.as_ref(), kind)?;
            let months = month_service.list()?;
            println!("{}", format_income_list(&incomes, &months, settings));
        }

        IncomeCommands::Edit {
            id,
            name,
            amount,
            kind,
            month,
            date,
        } => {
            let target = service.resolve(&id)?;

            let patch = IncomePatch {
                income: name,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                month_classification_id: month
                    .as_deref()
                    .map(|m| month_service.resolve(m))
                    .transpose()?
                    .map(|m| m.id),
                kind: kind.as_deref().map(parse_income_type).transpose()?,
            };

            let updated = service.update(&target.id, patch)?;
            let months = month_service.list()?;

            println!("Updated income.\n");
            print!("{}", format_income_details(&updated, &months, settings));
        }

        IncomeCommands::Delete { id } => {
            let target = service.resolve(&id)?;
            service.delete(&target.id)?;
            println!(
                "Deleted income: {} {}",
                target.income,
                target.amount.format_with_symbol(currency)
            );
        }
    }

    Ok(())
}

//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::TrackerResult;
use crate::models::{ExpensePatch, NewExpense};
use crate::services::{BudgetService, ExpenseService, MonthService};
use crate::storage::Storage;

use super::{date_or_today, month_for, parse_amount, parse_date};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Budget ID or category name
        #[arg(short, long)]
        budget: String,
        /// Month ID, key or label (default: the month matching the date)
        #[arg(short, long)]
        month: Option<String>,
        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only this month (ID, key or label)
        #[arg(short, long)]
        month: Option<String>,
        /// Only this budget (ID or category name)
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        /// Budget ID or category name
        #[arg(short, long)]
        budget: Option<String>,
        /// Month ID, key or label
        #[arg(short, long)]
        month: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);
    let budget_service = BudgetService::new(storage);
    let month_service = MonthService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            budget,
            month,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = date_or_today(date.as_deref())?;
            let budget = budget_service.resolve(&budget)?;
            let month = month_for(&month_service, month.as_deref(), date)?;

            let expense = service.create(NewExpense {
                expense: name,
                amount,
                date,
                budget_id: budget.id,
                month_classification_id: month.id,
            })?;

            println!(
                "Recorded expense: {} {} ({}, {})",
                expense.expense,
                expense.amount.format_with_symbol(currency),
                budget.category,
                month.month
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { month, budget } => {
            let month_id = month
                .as_deref()
                .map(|m| month_service.resolve(m))
                .transpose()?
                .map(|m| m.id);

            let mut expenses = service.list(month_id.as_ref())?;
            if let Some(identifier) = budget {
                let budget = budget_service.resolve(&identifier)?;
                expenses.retain(|e| e.budget_id == budget.id);
            }

            let budgets = budget_service.list()?;
            let months = month_service.list()?;
            println!("{}", format_expense_list(&expenses, &budgets, &months, settings));
        }

        ExpenseCommands::Edit {
            id,
            name,
            amount,
            budget,
            month,
            date,
        } => {
            let target = service.resolve(&id)?;

            let patch = ExpensePatch {
                expense: name,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                budget_id: budget
                    .as_deref()
                    .map(|b| budget_service.resolve(b))
                    .transpose()?
                    .map(|b| b.id),
                month_classification_id: month
                    .as_deref()
                    .map(|m| month_service.resolve(m))
                    .transpose()?
                    .map(|m| m.id),
            };

            let updated = service.update(&target.id, patch)?;
            let budgets = budget_service.list()?;
            let months = month_service.list()?;

            println!("Updated expense.\n");
            print!("{}", format_expense_details(&updated, &budgets, &months, settings));
        }

        ExpenseCommands::Delete { id } => {
            let target = service.resolve(&id)?;
            service.delete(&target.id)?;
            println!(
                "Deleted expense: {} {}",
                target.expense,
                target.amount.format_with_symbol(currency)
            );
        }
    }

    Ok(())
}

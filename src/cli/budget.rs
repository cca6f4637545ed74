//! Budget CLI commands
//!
//! Implements CLI commands for budget categories and their spending.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_details, format_budget_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetPatch, CategoryType};
use crate::reports::{budget_spending, MonthFilter};
use crate::services::{BudgetService, ExpenseService, MonthService};
use crate::storage::Storage;

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a budget category
    Add {
        /// Category name, e.g. "Groceries"
        category: String,
        /// Monthly amount (e.g., "500" or "500.00")
        amount: String,
        /// Wants, Needs or Savings
        #[arg(short = 't', long = "type", default_value = "Needs")]
        category_type: String,
    },

    /// List budgets with what has been spent against them
    #[command(alias = "ls")]
    List {
        /// Only count spending in this month (ID, key or label; default all)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Edit a budget
    Edit {
        /// Budget ID or category name
        budget: String,
        /// New category name
        #[arg(short, long)]
        category: Option<String>,
        /// New monthly amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New type (Wants, Needs or Savings)
        #[arg(short = 't', long = "type")]
        category_type: Option<String>,
    },

    /// Delete a budget (its expenses are kept and show as "Unknown")
    #[command(alias = "rm")]
    Delete {
        /// Budget ID or category name
        budget: String,
    },
}

fn parse_category_type(input: &str) -> TrackerResult<CategoryType> {
    input.parse().map_err(TrackerError::Validation)
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let expense_service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Add {
            category,
            amount,
            category_type,
        } => {
            let amount = parse_amount(&amount)?;
            let category_type = parse_category_type(&category_type)?;
            let budget = service.create(&category, amount, category_type)?;

            println!(
                "Created budget: {} ({}, {} per month)",
                budget.category,
                budget.category_type,
                budget.monthly_budget.format_with_symbol(currency)
            );
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::List { month } => {
            let filter = match month {
                Some(identifier) => {
                    let month = MonthService::new(storage).resolve(&identifier)?;
                    println!("Spending in {}\n", month.month);
                    MonthFilter::Month(month.id)
                }
                None => MonthFilter::All,
            };

            let budgets = service.list()?;
            let expenses = match &filter {
                MonthFilter::All => expense_service.list(None)?,
                MonthFilter::Month(id) => expense_service.list(Some(id))?,
            };

            println!(
                "{}",
                format_budget_list(&budget_spending(&budgets, &expenses), currency)
            );
        }

        BudgetCommands::Edit {
            budget,
            category,
            amount,
            category_type,
        } => {
            let target = service.resolve(&budget)?;

            let patch = BudgetPatch {
                category,
                monthly_budget: amount.as_deref().map(parse_amount).transpose()?,
                category_type: category_type
                    .as_deref()
                    .map(parse_category_type)
                    .transpose()?,
            };

            if patch.category.is_none()
                && patch.monthly_budget.is_none()
                && patch.category_type.is_none()
            {
                println!("No changes specified. Use --category, --amount or --type.");
                return Ok(());
            }

            let updated = service.update(&target.id, patch)?;
            let spent = expense_service.list_for_budget(&updated.id)?;
            let rows = budget_spending(std::slice::from_ref(&updated), &spent);

            println!("Updated budget.\n");
            if let Some(row) = rows.first() {
                print!("{}", format_budget_details(row, currency));
            }
        }

        BudgetCommands::Delete { budget } => {
            let target = service.resolve(&budget)?;
            service.delete(&target.id)?;
            println!("Deleted budget: {}", target.category);
        }
    }

    Ok(())
}

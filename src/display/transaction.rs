//! Expense and income display formatting
//!
//! Budget and month references are shown by name; a reference to a record
//! that no longer exists shows as "Unknown".

use tabled::Tabled;

use crate::config::Settings;
use crate::models::{Budget, Expense, Income, Money, MonthClassification};
use crate::services::{budget_name, month_label};

use super::{format_date, render_table, truncate};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Expense")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Month")]
    month: String,
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Income")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Month")]
    month: String,
}

/// Format expenses as a table followed by their total
pub fn format_expense_list(
    expenses: &[Expense],
    budgets: &[Budget],
    months: &[MonthClassification],
    settings: &Settings,
) -> String {
    let currency = settings.currency_symbol.as_str();
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: format_date(e.date, &settings.date_format),
            name: truncate(&e.expense, 30),
            amount: e.amount.format_with_symbol(currency),
            budget: budget_name(budgets, &e.budget_id).to_string(),
            month: month_label(months, &e.month_classification_id).to_string(),
        })
        .collect();

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\nTotal: {} ({} expenses)",
        render_table(rows, &[3]),
        total.format_with_symbol(currency),
        expenses.len()
    )
}

/// Format incomes as a table followed by their total
pub fn format_income_list(
    incomes: &[Income],
    months: &[MonthClassification],
    settings: &Settings,
) -> String {
    let currency = settings.currency_symbol.as_str();
    if incomes.is_empty() {
        return "No incomes found.".to_string();
    }

    let rows: Vec<IncomeRow> = incomes
        .iter()
        .map(|i| IncomeRow {
            id: i.id.to_string(),
            date: format_date(i.date, &settings.date_format),
            name: truncate(&i.income, 30),
            amount: i.amount.format_with_symbol(currency),
            kind: i.kind.to_string(),
            month: month_label(months, &i.month_classification_id).to_string(),
        })
        .collect();

    let total: Money = incomes.iter().map(|i| i.amount).sum();
    format!(
        "{}\nTotal: {} ({} incomes)",
        render_table(rows, &[3]),
        total.format_with_symbol(currency),
        incomes.len()
    )
}

/// Format a single expense's details
pub fn format_expense_details(
    expense: &Expense,
    budgets: &[Budget],
    months: &[MonthClassification],
    settings: &Settings,
) -> String {
    let currency = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.expense));
    output.push_str(&format!("ID:       {}\n", expense.id));
    output.push_str(&format!(
        "Date:     {}\n",
        format_date(expense.date, &settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Budget:   {}\n",
        budget_name(budgets, &expense.budget_id)
    ));
    output.push_str(&format!(
        "Month:    {}\n",
        month_label(months, &expense.month_classification_id)
    ));

    output
}

/// Format a single income's details
pub fn format_income_details(
    income: &Income,
    months: &[MonthClassification],
    settings: &Settings,
) -> String {
    let currency = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Income:   {}\n", income.income));
    output.push_str(&format!("ID:       {}\n", income.id));
    output.push_str(&format!(
        "Date:     {}\n",
        format_date(income.date, &settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:   {}\n",
        income.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!("Type:     {}\n", income.kind));
    output.push_str(&format!(
        "Month:    {}\n",
        month_label(months, &income.month_classification_id)
    ));

    output
}

//! Month summary
//!
//! Totals for one month classification broken down by budget and by
//! income type.

use crate::error::TrackerResult;
use crate::models::{Budget, Expense, Income, IncomeType, Money, MonthClassification};
use crate::storage::Storage;

/// Spending against one budget within the month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTotal {
    pub budget: Budget,
    pub total: Money,
    /// `total` as a percentage of the budget's monthly amount
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeTypeTotal {
    pub kind: IncomeType,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: MonthClassification,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    /// Every budget, including those with nothing spent this month
    pub expenses_by_budget: Vec<BudgetTotal>,
    /// One entry per income type, in `Salary, Refund, Other` order
    pub incomes_by_type: Vec<IncomeTypeTotal>,
}

/// Summarize the expenses and incomes recorded under `month`
pub fn month_summary(
    month: &MonthClassification,
    budgets: &[Budget],
    expenses: &[Expense],
    incomes: &[Income],
) -> MonthSummary {
    let expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|e| e.month_classification_id == month.id)
        .collect();
    let incomes: Vec<&Income> = incomes
        .iter()
        .filter(|i| i.month_classification_id == month.id)
        .collect();

    let total_expense: Money = expenses.iter().map(|e| e.amount).sum();
    let total_income: Money = incomes.iter().map(|i| i.amount).sum();

    let expenses_by_budget = budgets
        .iter()
        .map(|budget| {
            let total: Money = expenses
                .iter()
                .filter(|e| e.budget_id == budget.id)
                .map(|e| e.amount)
                .sum();
            BudgetTotal {
                budget: budget.clone(),
                total,
                percentage: total.percent_of(budget.monthly_budget),
            }
        })
        .collect();

    let incomes_by_type = IncomeType::ALL
        .iter()
        .map(|&kind| IncomeTypeTotal {
            kind,
            total: incomes
                .iter()
                .filter(|i| i.kind == kind)
                .map(|i| i.amount)
                .sum(),
        })
        .collect();

    MonthSummary {
        month: month.clone(),
        total_income,
        total_expense,
        balance: total_income - total_expense,
        expenses_by_budget,
        incomes_by_type,
    }
}

impl MonthSummary {
    /// Load the collections and summarize `month`
    pub fn generate(storage: &Storage, month: &MonthClassification) -> TrackerResult<Self> {
        let budgets = storage.budgets.get_all()?;
        let expenses = storage.expenses.get_all()?;
        let incomes = storage.incomes.get_all()?;

        Ok(month_summary(month, &budgets, &expenses, &incomes))
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Month Summary - {} ({})\n",
            self.month.month, self.month.month_num
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Income:",
            self.total_income.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Total Expenses:",
            self.total_expense.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>16}\n",
            "Balance:",
            self.balance.format_with_symbol(currency)
        ));

        output.push_str("\nExpenses by Budget\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.expenses_by_budget.is_empty() {
            output.push_str("No budgets defined\n");
        }
        for row in &self.expenses_by_budget {
            output.push_str(&format!(
                "{:<28} {:>16} {:>7.0}%\n",
                row.budget.category,
                row.total.format_with_symbol(currency),
                row.percentage
            ));
        }

        output.push_str("\nIncome by Type\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &self.incomes_by_type {
            output.push_str(&format!(
                "{:<28} {:>16}\n",
                row.kind.to_string(),
                row.total.format_with_symbol(currency)
            ));
        }

        output
    }
}

//! Budget spending
//!
//! How much of each budget category has been spent.

use crate::models::{Budget, Expense, Money};

/// A budget with the spending recorded against it
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetWithSpending {
    pub budget: Budget,
    /// Sum of expenses referencing this budget
    pub total_spent: Money,
    /// Negative once the budget is exceeded
    pub remaining: Money,
    /// Spent as a percentage of the monthly budget; 0 when the budget is 0
    pub percentage: f64,
}

impl BudgetWithSpending {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Spending per budget, in the order the budgets are given
pub fn budget_spending(budgets: &[Budget], expenses: &[Expense]) -> Vec<BudgetWithSpending> {
    budgets
        .iter()
        .map(|budget| {
            let total_spent: Money = expenses
                .iter()
                .filter(|e| e.budget_id == budget.id)
                .map(|e| e.amount)
                .sum();

            BudgetWithSpending {
                budget: budget.clone(),
                total_spent,
                remaining: budget.monthly_budget - total_spent,
                percentage: total_spent.percent_of(budget.monthly_budget),
            }
        })
        .collect()
}

/// Format the spending overview for terminal display
pub fn format_terminal(rows: &[BudgetWithSpending], currency: &str) -> String {
    if rows.is_empty() {
        return "No budgets found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<24} {:<8} {:>14} {:>14} {:>14} {:>8}\n",
        "Category", "Type", "Budget", "Spent", "Remaining", "Used"
    ));
    output.push_str(&"-".repeat(87));
    output.push('\n');

    for row in rows {
        let marker = if row.is_over_budget() { " *" } else { "" };
        output.push_str(&format!(
            "{:<24} {:<8} {:>14} {:>14} {:>14} {:>7.0}%{}\n",
            row.budget.category,
            row.budget.category_type,
            row.budget.monthly_budget.format_with_symbol(currency),
            row.total_spent.format_with_symbol(currency),
            row.remaining.format_with_symbol(currency),
            row.percentage,
            marker
        ));
    }

    if rows.iter().any(BudgetWithSpending::is_over_budget) {
        output.push_str("\n* = Over budget\n");
    }

    output
}

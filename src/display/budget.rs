//! Budget display formatting
//!
//! Budgets are always shown with what has been spent against them.

use tabled::Tabled;

use crate::reports::BudgetWithSpending;

use super::{render_table, truncate};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    category_type: String,
    #[tabled(rename = "Budget")]
    monthly_budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

/// Format budgets with spending as a table
pub fn format_budget_list(rows: &[BudgetWithSpending], currency: &str) -> String {
    if rows.is_empty() {
        return "No budgets found.".to_string();
    }

    let table_rows: Vec<BudgetRow> = rows
        .iter()
        .map(|row| BudgetRow {
            id: row.budget.id.to_string(),
            category: truncate(&row.budget.category, 24),
            category_type: row.budget.category_type.to_string(),
            monthly_budget: row.budget.monthly_budget.format_with_symbol(currency),
            spent: row.total_spent.format_with_symbol(currency),
            remaining: if row.is_over_budget() {
                format!("{} *", row.remaining.format_with_symbol(currency))
            } else {
                row.remaining.format_with_symbol(currency)
            },
            used: format!("{:.0}%", row.percentage),
        })
        .collect();

    let mut output = render_table(table_rows, &[3, 4, 5, 6]);
    if rows.iter().any(BudgetWithSpending::is_over_budget) {
        output.push_str("\n* = Over budget");
    }
    output
}

/// Format a single budget's details
pub fn format_budget_details(row: &BudgetWithSpending, currency: &str) -> String {
    let budget = &row.budget;
    let mut output = String::new();

    output.push_str(&format!("Budget:     {}\n", budget.category));
    output.push_str(&format!("ID:         {}\n", budget.id));
    output.push_str(&format!("Type:       {}\n", budget.category_type));
    output.push_str(&format!(
        "Monthly:    {}\n",
        budget.monthly_budget.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Spent:      {} ({:.0}%)\n",
        row.total_spent.format_with_symbol(currency),
        row.percentage
    ));
    output.push_str(&format!(
        "Remaining:  {}\n",
        row.remaining.format_with_symbol(currency)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, CategoryType, Money, RecordId};
    use chrono::Utc;

    fn row(spent_cents: i64) -> BudgetWithSpending {
        let budget = Budget {
            id: RecordId::from("b-1"),
            category: "Groceries".into(),
            monthly_budget: Money::from_major(500),
            category_type: CategoryType::Needs,
            created_at: Utc::now(),
        };
        let spent = Money::from_cents(spent_cents);
        BudgetWithSpending {
            remaining: budget.monthly_budget - spent,
            percentage: spent.percent_of(budget.monthly_budget),
            total_spent: spent,
            budget,
        }
    }

    #[test]
    fn test_format_budget_list() {
        let output = format_budget_list(&[row(12500)], "RM");
        assert!(output.contains("Groceries"));
        assert!(output.contains("Needs"));
        assert!(output.contains("RM 500.00"));
        assert!(output.contains("RM 375.00"));
        assert!(output.contains("25%"));
        assert!(!output.contains("Over budget"));
    }

    #[test]
    fn test_over_budget_is_flagged() {
        let output = format_budget_list(&[row(60000)], "RM");
        assert!(output.contains("-RM 100.00 *"));
        assert!(output.contains("Over budget"));
    }

    #[test]
    fn test_format_budget_details() {
        let output = format_budget_details(&row(5000), "$");
        assert!(output.contains("Budget:     Groceries"));
        assert!(output.contains("$ 450.00"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_budget_list(&[], "RM").contains("No budgets found"));
    }
}

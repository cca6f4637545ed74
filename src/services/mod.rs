//! Service layer for Spendbook
//!
//! The service layer sits between the front end and the repositories. It
//! validates input before anything is persisted, resolves what the user
//! typed to a record, and puts listings in display order.

pub mod budget;
pub mod expense;
pub mod income;
pub mod month;

pub use budget::BudgetService;
pub use expense::ExpenseService;
pub use income::IncomeService;
pub use month::MonthService;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Money, MonthClassification, RecordId};

/// Shown in place of a dangling budget or month reference
pub const UNKNOWN: &str = "Unknown";

/// Category name of the referenced budget, or [`UNKNOWN`]
pub fn budget_name<'b>(budgets: &'b [Budget], id: &RecordId) -> &'b str {
    budgets
        .iter()
        .find(|b| &b.id == id)
        .map(|b| b.category.as_str())
        .unwrap_or(UNKNOWN)
}

/// Label of the referenced month, or [`UNKNOWN`]
pub fn month_label<'m>(months: &'m [MonthClassification], id: &RecordId) -> &'m str {
    months
        .iter()
        .find(|m| &m.id == id)
        .map(|m| m.month.as_str())
        .unwrap_or(UNKNOWN)
}

fn require_text(field: &str, value: &str) -> TrackerResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TrackerError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(value.to_string())
}

fn require_positive(field: &str, amount: Money) -> TrackerResult<()> {
    if !amount.is_positive() {
        return Err(TrackerError::Validation(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(())
}

fn require_selection(field: &str, id: &RecordId) -> TrackerResult<()> {
    if id.is_empty() {
        return Err(TrackerError::Validation(format!("Please select a {}", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryType;
    use chrono::Utc;

    fn budget(id: &str, category: &str) -> Budget {
        Budget {
            id: RecordId::from(id),
            category: category.into(),
            monthly_budget: Money::from_major(100),
            category_type: CategoryType::Needs,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_budget_name_lookup() {
        let budgets = vec![budget("b-1", "Food"), budget("b-2", "Rent")];
        assert_eq!(budget_name(&budgets, &RecordId::from("b-2")), "Rent");
        assert_eq!(budget_name(&budgets, &RecordId::from("deleted")), UNKNOWN);
        assert_eq!(budget_name(&[], &RecordId::from("b-1")), UNKNOWN);
    }

    #[test]
    fn test_validation_helpers() {
        assert_eq!(require_text("Name", "  Lunch ").unwrap(), "Lunch");
        assert!(require_text("Name", "   ").unwrap_err().is_validation());
        assert!(require_positive("Amount", Money::zero()).is_err());
        assert!(require_positive("Amount", Money::from_cents(-1)).is_err());
        assert!(require_positive("Amount", Money::from_cents(1)).is_ok());
        assert!(require_selection("budget", &RecordId::from("")).is_err());
    }
}

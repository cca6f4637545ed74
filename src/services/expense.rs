//! Expense service
//!
//! Expenses reference a budget and a month by ID only. Neither reference is
//! checked for existence here; an expense whose budget was deleted shows up
//! under "Unknown".

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpensePatch, Money, NewExpense, RecordFilter, RecordId};
use crate::storage::Storage;

use super::{require_positive, require_selection, require_text};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Expenses newest first, optionally limited to one month
    pub fn list(&self, month: Option<&RecordId>) -> TrackerResult<Vec<Expense>> {
        let mut expenses = match month {
            Some(id) => self
                .storage
                .expenses
                .find(&RecordFilter::MonthClassification(id.clone()))?,
            None => self.storage.expenses.get_all()?,
        };
        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    /// Expenses recorded against one budget, newest first
    pub fn list_for_budget(&self, budget: &RecordId) -> TrackerResult<Vec<Expense>> {
        let mut expenses = self
            .storage
            .expenses
            .find(&RecordFilter::Budget(budget.clone()))?;
        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    pub fn get(&self, id: &RecordId) -> Option<Expense> {
        self.storage.expenses.get_by_id(id)
    }

    pub fn resolve(&self, id: &str) -> TrackerResult<Expense> {
        self.get(&RecordId::from(id))
            .ok_or_else(|| TrackerError::expense_not_found(id))
    }

    pub fn create(&self, draft: NewExpense) -> TrackerResult<Expense> {
        let draft = NewExpense {
            expense: require_text("Expense name", &draft.expense)?,
            ..draft
        };
        require_positive("Amount", draft.amount)?;
        require_selection("budget", &draft.budget_id)?;
        require_selection("month", &draft.month_classification_id)?;

        self.storage.expenses.create(draft)
    }

    pub fn update(&self, id: &RecordId, patch: ExpensePatch) -> TrackerResult<Expense> {
        let patch = ExpensePatch {
            expense: patch
                .expense
                .map(|e| require_text("Expense name", &e))
                .transpose()?,
            ..patch
        };
        if let Some(amount) = patch.amount {
            require_positive("Amount", amount)?;
        }
        if let Some(budget_id) = &patch.budget_id {
            require_selection("budget", budget_id)?;
        }
        if let Some(month_id) = &patch.month_classification_id {
            require_selection("month", month_id)?;
        }

        self.storage
            .expenses
            .update(id, patch)
            .ok_or_else(|| TrackerError::expense_not_found(id.as_str()))
    }

    pub fn delete(&self, id: &RecordId) -> TrackerResult<()> {
        if self.storage.expenses.delete(id) {
            Ok(())
        } else {
            Err(TrackerError::expense_not_found(id.as_str()))
        }
    }
}

/// Sum of the listed amounts
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::local(&paths).unwrap();
        (temp_dir, storage)
    }

    fn draft(name: &str, cents: i64, day: u32, month: &str) -> NewExpense {
        NewExpense {
            expense: name.into(),
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            budget_id: RecordId::from("b-1"),
            month_classification_id: RecordId::from(month),
        }
    }

    #[test]
    fn test_list_newest_first_with_month_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.create(draft("Coffee", 450, 2, "m-1")).unwrap();
        service.create(draft("Dinner", 3000, 20, "m-1")).unwrap();
        service.create(draft("Taxi", 1500, 10, "m-2")).unwrap();

        let all: Vec<String> = service
            .list(None)
            .unwrap()
            .into_iter()
            .map(|e| e.expense)
            .collect();
        assert_eq!(all, vec!["Dinner", "Taxi", "Coffee"]);

        let march = service.list(Some(&RecordId::from("m-1"))).unwrap();
        assert_eq!(march.len(), 2);
        assert_eq!(total(&march), Money::from_cents(3450));
    }

    #[test]
    fn test_create_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service
            .create(draft("Coffee", 0, 1, "m-1"))
            .unwrap_err()
            .is_validation());
        assert!(service
            .create(draft(" ", 100, 1, "m-1"))
            .unwrap_err()
            .is_validation());
        assert!(service
            .create(draft("Coffee", 100, 1, ""))
            .unwrap_err()
            .is_validation());

        let mut no_budget = draft("Coffee", 100, 1, "m-1");
        no_budget.budget_id = RecordId::from("");
        assert!(service.create(no_budget).unwrap_err().is_validation());

        assert!(service.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let expense = service.create(draft("Coffee", 450, 2, "m-1")).unwrap();

        let updated = service
            .update(
                &expense.id,
                ExpensePatch {
                    amount: Some(Money::from_cents(500)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount, Money::from_cents(500));
        assert_eq!(updated.expense, "Coffee");

        assert!(service
            .update(
                &expense.id,
                ExpensePatch {
                    amount: Some(Money::zero()),
                    ..Default::default()
                },
            )
            .unwrap_err()
            .is_validation());

        service.delete(&expense.id).unwrap();
        assert!(service.resolve(expense.id.as_str()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_for_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.create(draft("Coffee", 450, 2, "m-1")).unwrap();
        let mut other = draft("Book", 2000, 3, "m-1");
        other.budget_id = RecordId::from("b-2");
        service.create(other).unwrap();

        let found = service.list_for_budget(&RecordId::from("b-2")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].expense, "Book");
    }
}

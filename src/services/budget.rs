//! Budget service
//!
//! Budget categories carry a monthly amount and a Wants/Needs/Savings type.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, BudgetPatch, CategoryType, Money, NewBudget, RecordId};
use crate::storage::Storage;

use super::{require_positive, require_text, UNKNOWN};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All budgets in storage order
    pub fn list(&self) -> TrackerResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    pub fn get(&self, id: &RecordId) -> Option<Budget> {
        self.storage.budgets.get_by_id(id)
    }

    /// Category name for display, or "Unknown" if the budget is gone
    pub fn name_of(&self, id: &RecordId) -> String {
        self.get(id)
            .map(|b| b.category)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Find a budget by ID or category name (case-insensitive)
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<Budget>> {
        let identifier = identifier.trim();
        if let Some(budget) = self.get(&RecordId::from(identifier)) {
            return Ok(Some(budget));
        }

        Ok(self
            .list()?
            .into_iter()
            .find(|b| b.category.eq_ignore_ascii_case(identifier)))
    }

    pub fn resolve(&self, identifier: &str) -> TrackerResult<Budget> {
        self.find(identifier)?
            .ok_or_else(|| TrackerError::budget_not_found(identifier))
    }

    pub fn create(
        &self,
        category: &str,
        monthly_budget: Money,
        category_type: CategoryType,
    ) -> TrackerResult<Budget> {
        let category = require_text("Category", category)?;
        require_positive("Monthly budget", monthly_budget)?;

        self.storage.budgets.create(NewBudget {
            category,
            monthly_budget,
            category_type,
        })
    }

    pub fn update(&self, id: &RecordId, patch: BudgetPatch) -> TrackerResult<Budget> {
        let patch = BudgetPatch {
            category: patch
                .category
                .map(|c| require_text("Category", &c))
                .transpose()?,
            ..patch
        };
        if let Some(amount) = patch.monthly_budget {
            require_positive("Monthly budget", amount)?;
        }

        self.storage
            .budgets
            .update(id, patch)
            .ok_or_else(|| TrackerError::budget_not_found(id.as_str()))
    }

    /// Remove a budget. Expenses referencing it keep the dangling ID.
    pub fn delete(&self, id: &RecordId) -> TrackerResult<()> {
        if self.storage.budgets.delete(id) {
            Ok(())
        } else {
            Err(TrackerError::budget_not_found(id.as_str()))
        }
    }
}

//! Budget category model
//!
//! A budget is a named spending category with a monthly allowance.
//! Expenses point at it by ID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::RecordId;
use super::money::Money;
use super::record::{Collection, Record};

/// Classification of a budget category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryType {
    Wants,
    #[default]
    Needs,
    Savings,
}

impl CategoryType {
    pub const ALL: [CategoryType; 3] = [Self::Wants, Self::Needs, Self::Savings];
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wants => write!(f, "Wants"),
            Self::Needs => write!(f, "Needs"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

impl FromStr for CategoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wants" | "want" => Ok(Self::Wants),
            "needs" | "need" => Ok(Self::Needs),
            "savings" | "saving" => Ok(Self::Savings),
            other => Err(format!(
                "Unknown category type '{}' (expected Wants, Needs or Savings)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: RecordId,
    /// Category name, e.g. "Groceries"
    pub category: String,
    pub monthly_budget: Money,
    pub category_type: CategoryType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: String,
    pub monthly_budget: Money,
    pub category_type: CategoryType,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type: Option<CategoryType>,
}

impl Record for Budget {
    type Draft = NewBudget;
    type Patch = BudgetPatch;

    const COLLECTION: Collection = Collection::Budgets;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(draft: NewBudget, id: RecordId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            category: draft.category,
            monthly_budget: draft.monthly_budget,
            category_type: draft.category_type,
            created_at,
        }
    }

    fn apply(&mut self, patch: BudgetPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.monthly_budget {
            self.monthly_budget = amount;
        }
        if let Some(kind) = patch.category_type {
            self.category_type = kind;
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

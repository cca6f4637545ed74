//! The shape every persisted entity shares
//!
//! A record is created from a draft (all fields except `id`/`createdAt`),
//! edited through a patch (every field optional), and belongs to exactly
//! one collection.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use super::ids::RecordId;
use super::income::IncomeType;

/// The four persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    MonthClassifications,
    Budgets,
    Expenses,
    Incomes,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::MonthClassifications,
        Collection::Budgets,
        Collection::Expenses,
        Collection::Incomes,
    ];

    /// Key of the collection in the local store
    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::MonthClassifications => "expense_tracker_month_classifications",
            Self::Budgets => "expense_tracker_budgets",
            Self::Expenses => "expense_tracker_expenses",
            Self::Incomes => "expense_tracker_incomes",
        }
    }

    /// Path of the collection on the remote API
    pub fn remote_path(&self) -> &'static str {
        match self {
            Self::MonthClassifications => "/webhook/month-classifications",
            Self::Budgets => "/webhook/budgets",
            Self::Expenses => "/webhook/expenses",
            Self::Incomes => "/webhook/incomes",
        }
    }

    /// Singular name used in log lines and messages
    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::MonthClassifications => "Month",
            Self::Budgets => "Budget",
            Self::Expenses => "Expense",
            Self::Incomes => "Income",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// Secondary lookups supported by the repositories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    MonthClassification(RecordId),
    Budget(RecordId),
    IncomeType(IncomeType),
}

impl RecordFilter {
    /// Query-string pair the remote API understands for this filter
    pub fn query_pair(&self) -> (&'static str, String) {
        match self {
            Self::MonthClassification(id) => ("monthClassificationId", id.to_string()),
            Self::Budget(id) => ("budgetId", id.to_string()),
            Self::IncomeType(kind) => ("type", kind.to_string()),
        }
    }
}

/// A persisted entity
pub trait Record:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Fields supplied at creation
    type Draft: Clone + fmt::Debug + Serialize + Send + Sync;
    /// Partial update; absent fields are left untouched
    type Patch: Clone + fmt::Debug + Default + Serialize + Send + Sync;

    const COLLECTION: Collection;

    fn id(&self) -> &RecordId;

    fn from_draft(draft: Self::Draft, id: RecordId, created_at: DateTime<Utc>) -> Self;

    /// Merge the fields carried by `patch`; `id` and `created_at` never change
    fn apply(&mut self, patch: Self::Patch);

    /// Whether this record satisfies a secondary lookup. Filters on a field
    /// the record type doesn't have never match.
    fn matches(&self, _filter: &RecordFilter) -> bool {
        false
    }
}

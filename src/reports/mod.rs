//! Reports module for Spendbook
//!
//! Aggregations over already-loaded collections. The functions here are
//! pure; the `generate` constructors load what they need from storage first.

pub mod budget_spending;
pub mod dashboard;
pub mod month_summary;

pub use budget_spending::{budget_spending, BudgetWithSpending};
pub use dashboard::{
    dashboard_totals, recent_transactions, Dashboard, DashboardTotals, Transaction,
};
pub use month_summary::{month_summary, BudgetTotal, IncomeTypeTotal, MonthSummary};

use std::fmt;
use std::str::FromStr;

use crate::models::{Expense, Income, RecordId};

/// Number of entries in the recent transactions list
pub const RECENT_LIMIT: usize = 5;

/// Month selection for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(RecordId),
}

impl MonthFilter {
    pub fn includes(&self, month_classification_id: &RecordId) -> bool {
        match self {
            Self::All => true,
            Self::Month(id) => id == month_classification_id,
        }
    }

    pub fn expenses<'e>(&self, expenses: &'e [Expense]) -> Vec<&'e Expense> {
        expenses
            .iter()
            .filter(|e| self.includes(&e.month_classification_id))
            .collect()
    }

    pub fn incomes<'i>(&self, incomes: &'i [Income]) -> Vec<&'i Income> {
        incomes
            .iter()
            .filter(|i| self.includes(&i.month_classification_id))
            .collect()
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Month(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = std::convert::Infallible;

    /// `"all"` (any case) or a month ID
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Month(RecordId::from(s)))
        }
    }
}

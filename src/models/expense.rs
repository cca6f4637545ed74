//! Expense model
//!
//! `budget_id` and `month_classification_id` are soft references: nothing
//! stops the referenced budget or month from being deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::dates;
use super::ids::RecordId;
use super::money::Money;
use super::record::{Collection, Record, RecordFilter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: RecordId,
    /// What the money was spent on
    pub expense: String,
    pub amount: Money,
    #[serde(with = "dates::calendar")]
    pub date: NaiveDate,
    pub budget_id: RecordId,
    pub month_classification_id: RecordId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub expense: String,
    pub amount: Money,
    #[serde(with = "dates::calendar")]
    pub date: NaiveDate,
    pub budget_id: RecordId,
    pub month_classification_id: RecordId,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "dates::calendar_opt"
    )]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_classification_id: Option<RecordId>,
}

impl Record for Expense {
    type Draft = NewExpense;
    type Patch = ExpensePatch;

    const COLLECTION: Collection = Collection::Expenses;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(draft: NewExpense, id: RecordId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            expense: draft.expense,
            amount: draft.amount,
            date: draft.date,
            budget_id: draft.budget_id,
            month_classification_id: draft.month_classification_id,
            created_at,
        }
    }

    fn apply(&mut self, patch: ExpensePatch) {
        if let Some(expense) = patch.expense {
            self.expense = expense;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(budget_id) = patch.budget_id {
            self.budget_id = budget_id;
        }
        if let Some(month_id) = patch.month_classification_id {
            self.month_classification_id = month_id;
        }
    }

    fn matches(&self, filter: &RecordFilter) -> bool {
        match filter {
            RecordFilter::MonthClassification(id) => &self.month_classification_id == id,
            RecordFilter::Budget(id) => &self.budget_id == id,
            RecordFilter::IncomeType(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeType;

    fn coffee() -> Expense {
        Expense::from_draft(
            NewExpense {
                expense: "Coffee".into(),
                amount: Money::from_cents(850),
                date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                budget_id: RecordId::from("b-1"),
                month_classification_id: RecordId::from("m-1"),
            },
            RecordId::from("e-1"),
            Utc::now(),
        )
    }

    #[test]
    fn test_round_trip_keeps_date() {
        let expense = coffee();
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains(r#""date":"2026-01-15""#));
        assert!(json.contains(r#""budgetId":"b-1""#));
        assert!(json.contains(r#""monthClassificationId":"m-1""#));

        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_reads_timestamp_date() {
        let json = r#"{
            "id": "e-9",
            "expense": "Lunch",
            "amount": 12,
            "date": "2026-02-01T00:00:00.000Z",
            "budgetId": "b-1",
            "monthClassificationId": "m-2",
            "createdAt": "2026-02-01T08:00:00.000Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(expense.amount, Money::from_major(12));
    }

    #[test]
    fn test_matches() {
        let expense = coffee();
        assert!(expense.matches(&RecordFilter::Budget(RecordId::from("b-1"))));
        assert!(!expense.matches(&RecordFilter::Budget(RecordId::from("b-2"))));
        assert!(expense.matches(&RecordFilter::MonthClassification(RecordId::from("m-1"))));
        assert!(!expense.matches(&RecordFilter::IncomeType(IncomeType::Salary)));
    }

    #[test]
    fn test_patch_date_serialization() {
        let patch = ExpensePatch {
            date: NaiveDate::from_ymd_opt(2026, 3, 9),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"date":"2026-03-09"}"#);
    }
}

//! Income model
//!
//! Money received in a month, tagged with where it came from.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dates;
use super::ids::RecordId;
use super::money::Money;
use super::record::{Collection, Record, RecordFilter};

/// Source of an income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IncomeType {
    #[default]
    Salary,
    Refund,
    Other,
}

impl IncomeType {
    pub const ALL: [IncomeType; 3] = [Self::Salary, Self::Refund, Self::Other];
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Salary => write!(f, "Salary"),
            Self::Refund => write!(f, "Refund"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for IncomeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salary" => Ok(Self::Salary),
            "refund" => Ok(Self::Refund),
            "other" => Ok(Self::Other),
            other => Err(format!(
                "Unknown income type '{}' (expected Salary, Refund or Other)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: RecordId,
    /// Name of the income, e.g. "January salary"
    pub income: String,
    pub amount: Money,
    #[serde(with = "dates::calendar")]
    pub date: NaiveDate,
    pub month_classification_id: RecordId,
    #[serde(rename = "type")]
    pub kind: IncomeType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub income: String,
    pub amount: Money,
    #[serde(with = "dates::calendar")]
    pub date: NaiveDate,
    pub month_classification_id: RecordId,
    #[serde(rename = "type")]
    pub kind: IncomeType,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "dates::calendar_opt"
    )]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_classification_id: Option<RecordId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<IncomeType>,
}

impl Record for Income {
    type Draft = NewIncome;
    type Patch = IncomePatch;

    const COLLECTION: Collection = Collection::Incomes;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(draft: NewIncome, id: RecordId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            income: draft.income,
            amount: draft.amount,
            date: draft.date,
            month_classification_id: draft.month_classification_id,
            kind: draft.kind,
            created_at,
        }
    }

    fn apply(&mut self, patch: IncomePatch) {
        if let Some(income) = patch.income {
            self.income = income;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(month_id) = patch.month_classification_id {
            self.month_classification_id = month_id;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }

    fn matches(&self, filter: &RecordFilter) -> bool {
        match filter {
            RecordFilter::MonthClassification(id) => &self.month_classification_id == id,
            RecordFilter::IncomeType(kind) => &self.kind == kind,
            RecordFilter::Budget(_) => false,
        }
    }
}

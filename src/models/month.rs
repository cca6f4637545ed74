//! Month classification model
//!
//! A month classification is a label ("December 2026") plus a canonical
//! `MM-YY` key that expenses and incomes are grouped under.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::RecordId;
use super::record::{Collection, Record};

/// Canonical month key in `MM-YY` form
///
/// Ordering is plain string ordering. That matches chronological order only
/// within a single century ("99-99" sorts after "01-00"), which is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthNum(String);

impl MonthNum {
    /// Validate `MM-YY`: two ASCII digits, a dash, two ASCII digits
    pub fn parse(s: &str) -> Result<Self, MonthNumError> {
        let s = s.trim();
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b'-'
            && bytes[..2].iter().all(u8::is_ascii_digit)
            && bytes[3..].iter().all(u8::is_ascii_digit);

        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(MonthNumError(s.to_string()))
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%m-%y").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonthNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MonthNum {
    type Err = MonthNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthNum {
    type Error = MonthNumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthNum> for String {
    fn from(num: MonthNum) -> Self {
        num.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNumError(pub String);

impl fmt::Display for MonthNumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Month number must be MM-YY (e.g. 01-26), got '{}'", self.0)
    }
}

impl std::error::Error for MonthNumError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthClassification {
    pub id: RecordId,
    /// Free-text label, e.g. "December 2026"
    pub month: String,
    pub month_num: MonthNum,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMonth {
    pub month: String,
    pub month_num: MonthNum,
}

impl NewMonth {
    /// Label and key for the month containing `date`
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            month: date.format("%B %Y").to_string(),
            month_num: MonthNum::from_date(date),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_num: Option<MonthNum>,
}

impl Record for MonthClassification {
    type Draft = NewMonth;
    type Patch = MonthPatch;

    const COLLECTION: Collection = Collection::MonthClassifications;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(draft: NewMonth, id: RecordId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            month: draft.month,
            month_num: draft.month_num,
            created_at,
        }
    }

    fn apply(&mut self, patch: MonthPatch) {
        if let Some(month) = patch.month {
            self.month = month;
        }
        if let Some(month_num) = patch.month_num {
            self.month_num = month_num;
        }
    }
}

impl fmt::Display for MonthClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.month, self.month_num)
    }
}

//! Month service
//!
//! Month classifications are listed newest first by their `MM-YY` key and
//! can be looked up by ID, key or label.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{MonthClassification, MonthNum, MonthPatch, NewMonth, RecordId};
use crate::storage::Storage;

use super::require_text;

/// Service for month classification management
pub struct MonthService<'a> {
    storage: &'a Storage,
}

impl<'a> MonthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All months, sorted descending by `monthNum`
    pub fn list(&self) -> TrackerResult<Vec<MonthClassification>> {
        let mut months = self.storage.months.get_all()?;
        months.sort_by(|a, b| b.month_num.cmp(&a.month_num));
        Ok(months)
    }

    pub fn get(&self, id: &RecordId) -> Option<MonthClassification> {
        self.storage.months.get_by_id(id)
    }

    /// Find a month by ID, `MM-YY` key, or label (case-insensitive)
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<MonthClassification>> {
        let identifier = identifier.trim();
        if let Some(month) = self.get(&RecordId::from(identifier)) {
            return Ok(Some(month));
        }

        let months = self.list()?;
        Ok(months.into_iter().find(|m| {
            m.month_num.as_str() == identifier || m.month.eq_ignore_ascii_case(identifier)
        }))
    }

    /// Like [`find`](Self::find) but a miss is an error
    pub fn resolve(&self, identifier: &str) -> TrackerResult<MonthClassification> {
        self.find(identifier)?
            .ok_or_else(|| TrackerError::month_not_found(identifier))
    }

    pub fn create(&self, month: &str, month_num: &str) -> TrackerResult<MonthClassification> {
        let draft = NewMonth {
            month: require_text("Month name", month)?,
            month_num: parse_month_num(month_num)?,
        };
        self.storage.months.create(draft)
    }

    /// Create the month containing `today`, or return it if it already exists
    pub fn create_current(&self, today: NaiveDate) -> TrackerResult<MonthClassification> {
        let draft = NewMonth::for_date(today);

        let existing = self.storage.months.get_all()?;
        if let Some(month) = existing.into_iter().find(|m| m.month_num == draft.month_num) {
            debug!(month_num = %month.month_num, "Current month already exists");
            return Ok(month);
        }

        self.storage.months.create(draft)
    }

    pub fn update(
        &self,
        id: &RecordId,
        month: Option<&str>,
        month_num: Option<&str>,
    ) -> TrackerResult<MonthClassification> {
        let patch = MonthPatch {
            month: month.map(|m| require_text("Month name", m)).transpose()?,
            month_num: month_num.map(parse_month_num).transpose()?,
        };

        self.storage
            .months
            .update(id, patch)
            .ok_or_else(|| TrackerError::month_not_found(id.as_str()))
    }

    /// Remove a month. Expenses and incomes pointing at it are left as they are.
    pub fn delete(&self, id: &RecordId) -> TrackerResult<()> {
        if self.storage.months.delete(id) {
            Ok(())
        } else {
            Err(TrackerError::month_not_found(id.as_str()))
        }
    }
}

fn parse_month_num(value: &str) -> TrackerResult<MonthNum> {
    MonthNum::parse(value).map_err(|e| TrackerError::Validation(e.to_string()))
}

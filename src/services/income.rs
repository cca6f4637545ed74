//! Income service

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Income, IncomePatch, IncomeType, Money, NewIncome, RecordFilter, RecordId};
use crate::storage::Storage;

use super::{require_positive, require_selection, require_text};

/// Service for income management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Incomes newest first, optionally limited to one month and/or type
    pub fn list(
        &self,
        month: Option<&RecordId>,
        kind: Option<IncomeType>,
    ) -> TrackerResult<Vec<Income>> {
        let mut incomes = match (month, kind) {
            (Some(id), _) => self
                .storage
                .incomes
                .find(&RecordFilter::MonthClassification(id.clone()))?,
            (None, Some(kind)) => self.storage.incomes.find(&RecordFilter::IncomeType(kind))?,
            (None, None) => self.storage.incomes.get_all()?,
        };

        if let (Some(_), Some(kind)) = (month, kind) {
            incomes.retain(|i| i.kind == kind);
        }

        incomes.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(incomes)
    }

    pub fn get(&self, id: &RecordId) -> Option<Income> {
        self.storage.incomes.get_by_id(id)
    }

    pub fn resolve(&self, id: &str) -> TrackerResult<Income> {
        self.get(&RecordId::from(id))
            .ok_or_else(|| TrackerError::income_not_found(id))
    }

    pub fn create(&self, draft: NewIncome) -> TrackerResult<Income> {
        let draft = NewIncome {
            income: require_text("Income name", &draft.income)?,
            ..draft
        };
        require_positive("Amount", draft.amount)?;
        require_selection("month", &draft.month_classification_id)?;

        self.storage.incomes.create(draft)
    }

    pub fn update(&self, id: &RecordId, patch: IncomePatch) -> TrackerResult<Income> {
        let patch = IncomePatch {
            income: patch
                .income
                .map(|i| require_text("Income name", &i))
                .transpose()?,
            ..patch
        };
        if let Some(amount) = patch.amount {
            require_positive("Amount", amount)?;
        }
        if let Some(month_id) = &patch.month_classification_id {
            require_selection("month", month_id)?;
        }

        self.storage
            .incomes
            .update(id, patch)
            .ok_or_else(|| TrackerError::income_not_found(id.as_str()))
    }

    pub fn delete(&self, id: &RecordId) -> TrackerResult<()> {
        if self.storage.incomes.delete(id) {
            Ok(())
        } else {
            Err(TrackerError::income_not_found(id.as_str()))
        }
    }
}

/// Sum of the listed amounts
pub fn total(incomes: &[Income]) -> Money {
    incomes.iter().map(|i| i.amount).sum()
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

    fn draft(name: &str, major: i64, day: u32, month: &str, kind: IncomeType) -> NewIncome {
        NewIncome {
            income: name.into(),
            amount: Money::from_major(major),
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            month_classification_id: RecordId::from(month),
            kind,
        }
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        service
            .create(draft("Paycheck", 3000, 25, "m-1", IncomeType::Salary))
            .unwrap();
        service
            .create(draft("Return", 40, 5, "m-1", IncomeType::Refund))
            .unwrap();
        service
            .create(draft("Paycheck", 3000, 25, "m-2", IncomeType::Salary))
            .unwrap();

        assert_eq!(service.list(None, None).unwrap().len(), 3);

        let m1 = service.list(Some(&RecordId::from("m-1")), None).unwrap();
        assert_eq!(m1.len(), 2);
        assert_eq!(m1[0].income, "Paycheck");
        assert_eq!(total(&m1), Money::from_major(3040));

        let salaries = service.list(None, Some(IncomeType::Salary)).unwrap();
        assert_eq!(salaries.len(), 2);

        let m1_refunds = service
            .list(Some(&RecordId::from("m-1")), Some(IncomeType::Refund))
            .unwrap();
        assert_eq!(m1_refunds.len(), 1);
        assert_eq!(m1_refunds[0].income, "Return");
    }

    #[test]
    fn test_create_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        assert!(service
            .create(draft("Paycheck", -1, 1, "m-1", IncomeType::Salary))
            .unwrap_err()
            .is_validation());
        assert!(service
            .create(draft("Paycheck", 10, 1, "", IncomeType::Salary))
            .unwrap_err()
            .is_validation());
        assert!(service.list(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let err = service
            .update(
                &RecordId::from("nope"),
                IncomePatch {
                    kind: Some(IncomeType::Other),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_type() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let income = service
            .create(draft("Gift", 50, 1, "m-1", IncomeType::Salary))
            .unwrap();

        let updated = service
            .update(
                &income.id,
                IncomePatch {
                    kind: Some(IncomeType::Other),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.kind, IncomeType::Other);
        assert_eq!(updated.amount, Money::from_major(50));

        service.delete(&income.id).unwrap();
        assert!(service.delete(&income.id).unwrap_err().is_not_found());
    }
}

//! Local backend: one JSON file per collection
//!
//! No caching. Each call loads the whole collection, changes it in memory,
//! and writes the whole collection back, so the last writer wins.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::{Record, RecordId};

use super::file_io::{read_collection, write_collection};
use super::Repository;

pub struct LocalRepository<E> {
    path: PathBuf,
    _record: PhantomData<fn() -> E>,
}

impl<E: Record> LocalRepository<E> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store(&self, items: &[E]) -> TrackerResult<()> {
        write_collection(&self.path, items)
    }

    fn fresh_id(items: &[E]) -> RecordId {
        loop {
            let id = RecordId::generate();
            if !items.iter().any(|r| r.id() == &id) {
                return id;
            }
        }
    }
}

impl<E: Record> Repository<E> for LocalRepository<E> {
    fn get_all(&self) -> TrackerResult<Vec<E>> {
        match read_collection(&self.path) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(
                    collection = %E::COLLECTION,
                    error = %e,
                    "Error reading from storage, treating collection as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn get_by_id(&self, id: &RecordId) -> Option<E> {
        self.get_all()
            .unwrap_or_default()
            .into_iter()
            .find(|r| r.id() == id)
    }

    fn create(&self, draft: E::Draft) -> TrackerResult<E> {
        // An unreadable collection must not be overwritten with just the new record
        let mut items: Vec<E> = read_collection(&self.path).map_err(|e| {
            warn!(collection = %E::COLLECTION, error = %e, "Error reading from storage");
            e
        })?;
        let record = E::from_draft(draft, Self::fresh_id(&items), Utc::now());
        items.push(record.clone());

        self.store(&items).map_err(|e| {
            warn!(collection = %E::COLLECTION, error = %e, "Error saving to storage");
            e
        })?;

        debug!(collection = %E::COLLECTION, id = %record.id(), "Created record");
        Ok(record)
    }

    fn update(&self, id: &RecordId, patch: E::Patch) -> Option<E> {
        let mut items = self.get_all().unwrap_or_default();
        let record = items.iter_mut().find(|r| r.id() == id)?;
        record.apply(patch);
        let updated = record.clone();

        if let Err(e) = self.store(&items) {
            warn!(collection = %E::COLLECTION, %id, error = %e, "Error saving to storage");
            return None;
        }

        debug!(collection = %E::COLLECTION, %id, "Updated record");
        Some(updated)
    }

    fn delete(&self, id: &RecordId) -> bool {
        let items = self.get_all().unwrap_or_default();
        let before = items.len();
        let remaining: Vec<E> = items.into_iter().filter(|r| r.id() != id).collect();

        if remaining.len() == before {
            return false;
        }

        if let Err(e) = self.store(&remaining) {
            warn!(collection = %E::COLLECTION, %id, error = %e, "Error saving to storage");
            return false;
        }

        debug!(collection = %E::COLLECTION, %id, "Deleted record");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Budget, BudgetPatch, CategoryType, Expense, Money, NewBudget, NewExpense, RecordFilter,
    };
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn budget_repo() -> (TempDir, LocalRepository<Budget>) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense_tracker_budgets.json");
        (temp_dir, LocalRepository::new(path))
    }

    fn draft(name: &str, major: i64) -> NewBudget {
        NewBudget {
            category: name.into(),
            monthly_budget: Money::from_major(major),
            category_type: CategoryType::Needs,
        }
    }

    #[test]
    fn test_empty_collection() {
        let (_temp_dir, repo) = budget_repo();
        assert!(repo.get_all().unwrap().is_empty());
        assert!(repo.get_by_id(&RecordId::from("nope")).is_none());
    }

    #[test]
    fn test_create_then_get_by_id() {
        let (_temp_dir, repo) = budget_repo();

        let created = repo.create(draft("Groceries", 500)).unwrap();
        assert!(!created.id.is_empty());

        let fetched = repo.get_by_id(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_created_ids_are_unique() {
        let (_temp_dir, repo) = budget_repo();
        for i in 0..20 {
            repo.create(draft(&format!("Category {}", i), 10)).unwrap();
        }

        let ids: HashSet<_> = repo.get_all().unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_persists_across_instances() {
        let (temp_dir, repo) = budget_repo();
        let created = repo.create(draft("Rent", 1500)).unwrap();

        let reopened: LocalRepository<Budget> =
            LocalRepository::new(temp_dir.path().join("expense_tracker_budgets.json"));
        assert_eq!(reopened.get_by_id(&created.id).unwrap(), created);
    }

    #[test]
    fn test_update_merges_fields() {
        let (_temp_dir, repo) = budget_repo();
        let created = repo.create(draft("Groceries", 500)).unwrap();

        let updated = repo
            .update(
                &created.id,
                BudgetPatch {
                    monthly_budget: Some(Money::from_major(650)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.category, "Groceries");
        assert_eq!(updated.monthly_budget, Money::from_major(650));
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(repo.get_by_id(&created.id).unwrap(), updated);
    }

    #[test]
    fn test_update_missing_leaves_collection_unchanged() {
        let (_temp_dir, repo) = budget_repo();
        repo.create(draft("Groceries", 500)).unwrap();
        let before = repo.get_all().unwrap();

        let result = repo.update(
            &RecordId::from("missing"),
            BudgetPatch {
                category: Some("Changed".into()),
                ..Default::default()
            },
        );

        assert!(result.is_none());
        assert_eq!(repo.get_all().unwrap(), before);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = budget_repo();
        let keep = repo.create(draft("Keep", 1)).unwrap();
        let gone = repo.create(draft("Gone", 1)).unwrap();

        assert!(repo.delete(&gone.id));
        assert!(repo.get_by_id(&gone.id).is_none());
        assert!(!repo.delete(&gone.id));
        assert_eq!(repo.get_all().unwrap(), vec![keep]);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (_temp_dir, repo) = budget_repo();
        std::fs::write(repo.path(), "{ definitely not an array").unwrap();

        assert!(repo.get_all().unwrap().is_empty());
        assert!(!repo.delete(&RecordId::from("anything")));
    }

    #[test]
    fn test_create_on_corrupt_file_fails_without_writing() {
        let (_temp_dir, repo) = budget_repo();
        let rent = repo.create(draft("Rent", 1200)).unwrap();

        let mut raw = std::fs::read_to_string(repo.path()).unwrap();
        raw.truncate(raw.trim_end().len() - 1);
        raw.push_str(r#",{"id":"x","category":"Fo"#);
        std::fs::write(repo.path(), &raw).unwrap();

        assert!(repo.create(draft("Food", 300)).is_err());
        assert!(repo.update(&rent.id, BudgetPatch::default()).is_none());

        let after = std::fs::read_to_string(repo.path()).unwrap();
        assert_eq!(after, raw);
        assert!(after.contains("Rent"));
    }

    #[test]
    fn test_dates_reconstructed_on_read() {
        let temp_dir = TempDir::new().unwrap();
        let repo: LocalRepository<Expense> =
            LocalRepository::new(temp_dir.path().join("expense_tracker_expenses.json"));
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();

        let created = repo
            .create(NewExpense {
                expense: "Train".into(),
                amount: Money::from_cents(420),
                date,
                budget_id: RecordId::from("b-1"),
                month_classification_id: RecordId::from("m-1"),
            })
            .unwrap();

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        assert!(raw.contains("\"2026-01-31\""));

        let fetched = repo.get_by_id(&created.id).unwrap();
        assert_eq!(fetched.date, date);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn test_find_filters_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        let repo: LocalRepository<Expense> =
            LocalRepository::new(temp_dir.path().join("expense_tracker_expenses.json"));

        for budget in ["b-1", "b-2", "b-1"] {
            repo.create(NewExpense {
                expense: "Item".into(),
                amount: Money::from_major(1),
                date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                budget_id: RecordId::from(budget),
                month_classification_id: RecordId::from("m-1"),
            })
            .unwrap();
        }

        let found = repo.find(&RecordFilter::Budget(RecordId::from("b-1"))).unwrap();
        assert_eq!(found.len(), 2);
    }
}

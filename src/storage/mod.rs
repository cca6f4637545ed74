//! Storage layer for Spendbook
//!
//! Every collection is reached through [`Repository`]. Two backends
//! implement it: JSON files on disk ([`LocalRepository`]) and the webhook
//! API ([`RemoteRepository`]). [`Storage::open`] is the only place that
//! decides which one is used.

pub mod api_client;
pub mod file_io;
pub mod local;
pub mod remote;

use std::sync::Arc;

pub use api_client::{ApiClient, ApiClientConfig};
pub use local::LocalRepository;
pub use remote::RemoteRepository;

use tracing::debug;

use crate::config::{Settings, StorageMode, TrackerPaths};
use crate::error::TrackerResult;
use crate::models::{
    Budget, Expense, Income, MonthClassification, Record, RecordFilter, RecordId,
};

/// Persistence contract shared by both backends
///
/// `get_all`, `create` and `find` report failures to the caller. The
/// item-scoped operations collapse failures into "not found": `None` for
/// lookups and updates, `false` for deletes.
pub trait Repository<E: Record>: Send + Sync {
    fn get_all(&self) -> TrackerResult<Vec<E>>;

    fn get_by_id(&self, id: &RecordId) -> Option<E>;

    /// Store a new record; the backend assigns `id` and `createdAt`
    fn create(&self, draft: E::Draft) -> TrackerResult<E>;

    /// Merge `patch` into the record; `None` when it doesn't exist
    fn update(&self, id: &RecordId, patch: E::Patch) -> Option<E>;

    /// `true` only if a record was actually removed
    fn delete(&self, id: &RecordId) -> bool;

    /// Records satisfying a secondary lookup
    fn find(&self, filter: &RecordFilter) -> TrackerResult<Vec<E>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|r| r.matches(filter))
            .collect())
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    mode: StorageMode,
    pub months: Box<dyn Repository<MonthClassification>>,
    pub budgets: Box<dyn Repository<Budget>>,
    pub expenses: Box<dyn Repository<Expense>>,
    pub incomes: Box<dyn Repository<Income>>,
}

impl Storage {
    /// Open the backend selected by `settings`
    pub fn open(settings: &Settings, paths: &TrackerPaths) -> TrackerResult<Self> {
        debug!(mode = %settings.storage, "Opening storage");
        match settings.storage {
            StorageMode::Local => Self::local(paths),
            StorageMode::Remote => {
                let client = ApiClient::new(ApiClientConfig::from(&settings.remote))?;
                Ok(Self::remote(client))
            }
        }
    }

    /// File-backed storage under `paths`
    pub fn local(paths: &TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            mode: StorageMode::Local,
            months: Box::new(local_repo::<MonthClassification>(paths)),
            budgets: Box::new(local_repo::<Budget>(paths)),
            expenses: Box::new(local_repo::<Expense>(paths)),
            incomes: Box::new(local_repo::<Income>(paths)),
        })
    }

    /// API-backed storage sharing one client
    pub fn remote(client: ApiClient) -> Self {
        let client = Arc::new(client);

        Self {
            mode: StorageMode::Remote,
            months: Box::new(RemoteRepository::new(Arc::clone(&client))),
            budgets: Box::new(RemoteRepository::new(Arc::clone(&client))),
            expenses: Box::new(RemoteRepository::new(Arc::clone(&client))),
            incomes: Box::new(RemoteRepository::new(client)),
        }
    }

    pub fn mode(&self) -> StorageMode {
        self.mode
    }
}

fn local_repo<E: Record>(paths: &TrackerPaths) -> LocalRepository<E> {
    LocalRepository::new(paths.collection_file(E::COLLECTION.storage_key()))
}

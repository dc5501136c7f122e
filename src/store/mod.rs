pub mod json_backend;

use crate::{budget::Budget, errors::StoreError};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends capable of storing quote records.
///
/// Point-lookup misses are `Ok(None)`, never errors. Any I/O failure from
/// the backing engine surfaces as `StoreError::Storage`.
pub trait RecordStore: Send + Sync {
    /// Every stored record, in no particular order.
    fn list_all(&self) -> Result<Vec<Budget>>;
    fn get_by_id(&self, id: u64) -> Result<Option<Budget>>;
    /// Assigns an id when the record has none, recomputes the cached total,
    /// and fully replaces any prior value for that key. Returns the stored
    /// record with its definitive id.
    fn upsert(&self, budget: Budget) -> Result<Budget>;
    /// Idempotent: deleting an absent id is a no-op.
    fn delete(&self, id: u64) -> Result<()>;
    /// Upsert-by-id for each record in order, verbatim (no id allocation, no
    /// total recompute — this is the backup restoration path). Atomic per
    /// record, not across the batch: a mid-batch failure reports how many
    /// records were applied before it.
    fn bulk_upsert(&self, records: Vec<Budget>) -> Result<usize>;
}

pub use json_backend::JsonStore;

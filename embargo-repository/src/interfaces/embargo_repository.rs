//! This module defines the `EmbargoRepository` trait, the single write path
//! for embargo records.
use embargo_shared::types::{EmbargoRecord, RecordId};
use crate::errors::PersistenceError;

/// A trait that defines the interface for persisting embargo records.
#[async_trait::async_trait]
pub trait EmbargoRepository: Send + Sync {
    /// Inserts one `EmbargoRecord` into the repository.
    ///
    /// The record is committed as soon as this method returns successfully.
    /// Nothing checks for an existing embargo on the same node, so inserting
    /// the same record twice stores it twice.
    ///
    /// # Arguments
    ///
    /// * `record` - The embargo to store.
    ///
    /// # Returns
    ///
    /// The identifier assigned by the store, or a `PersistenceError` if the
    /// store rejects the record.
    async fn insert(&self, record: &EmbargoRecord) -> Result<RecordId, PersistenceError>;
}

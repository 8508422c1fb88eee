use embargo_shared::types::SourceRow;
use crate::errors::StorageError;

/// Trait for reading the legacy embargo expiry field.
///
/// The source is read-only: implementors must never write to it.
#[async_trait::async_trait]
pub trait ExpirySource: Send + Sync {
    /// Returns every stored expiry row.
    ///
    /// No filtering, pagination or ordering is applied; rows come back in
    /// whatever order the underlying store yields them.
    async fn fetch_expiry_rows(&self) -> Result<Vec<SourceRow>, StorageError>;
}

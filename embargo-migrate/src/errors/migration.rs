use embargo_repository::{PersistenceError, StorageError};

/// Errors that end an embargo migration run.
///
/// Every variant is fatal: the first one encountered stops the run and any
/// embargoes saved before it stay in the destination store.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Database connection error: {0}")]
    Database(#[source] sqlx::Error),
    #[error("Failed to read legacy expiry rows: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to save embargo: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Migration did not finish within {0}s")]
    Timeout(u64),
}

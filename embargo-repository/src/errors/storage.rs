use thiserror::Error;

/// Represents errors that can occur while reading the legacy expiry rows.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Source table does not exist: {0}")]
    MissingTable(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

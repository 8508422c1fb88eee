//! Error types for the embargo repository.
//! Reading the legacy source and writing embargo records fail independently,
//! so each side has its own error type.
mod persistence;
mod storage;

pub use persistence::PersistenceError;
pub use storage::StorageError;

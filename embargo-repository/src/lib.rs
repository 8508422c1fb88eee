//! # Embargo Repository
//! This crate provides traits and implementations for reading legacy embargo
//! expiry rows and persisting embargo records. It includes definitions for
//! errors, interfaces, and concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::{PersistenceError, StorageError};
pub use interfaces::{EmbargoRepository, ExpirySource};
pub use postgres::{PostgresEmbargoRepository, PostgresExpirySource};

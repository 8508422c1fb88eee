//! Embargo Migration Library
//!
//! This library turns legacy embargo expiry field values into embargo records.
//! It provides the migrator itself, the SQL generator that seeds the legacy
//! field table from an export, configuration and dependency wiring, and error
//! handling.

pub mod config;
pub mod errors;
pub mod logging;
pub mod migrator;
pub mod seed;

pub use config::{Dependencies, MigrationConfig, SeedConfig};
pub use errors::{MigrationError, SeedError};
pub use migrator::{MigrationReport, RecordMigrator};
pub use seed::ExpirySqlGenerator;

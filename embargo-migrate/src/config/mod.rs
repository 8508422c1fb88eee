//! Configuration module for the embargo migration.
//! Reads settings from the environment and wires up the stores.
mod dependencies;
mod settings;

pub use dependencies::{Dependencies, PG_MAX_CONNECTIONS};
pub use settings::{MigrationConfig, SeedConfig};

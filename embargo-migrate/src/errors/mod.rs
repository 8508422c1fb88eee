//! Error types for the embargo migration commands.
mod migration;
mod seed;

pub use migration::MigrationError;
pub use seed::SeedError;

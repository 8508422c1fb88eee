//! PostgreSQL implementations of the embargo stores.
//!
//! Both stores share one `sqlx::PgPool`. Schema for local runs and tests lives
//! in `migrations/`.
mod embargo_repository;
mod expiry_source;

pub use embargo_repository::PostgresEmbargoRepository;
pub use expiry_source::{PostgresExpirySource, SOURCE_TABLE};

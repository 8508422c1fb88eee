//! This module defines and re-exports the interfaces for the embargo stores.
//! The migrator only ever talks to these traits, never to a database directly.
mod embargo_repository;
mod expiry_source;

pub use embargo_repository::EmbargoRepository;
pub use expiry_source::ExpirySource;

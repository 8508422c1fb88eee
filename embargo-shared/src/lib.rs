//! # Embargo Shared
//! This crate defines the data structures shared across the embargo migration
//! workspace: the legacy expiry rows read from node storage and the embargo
//! records created from them.
pub mod types;

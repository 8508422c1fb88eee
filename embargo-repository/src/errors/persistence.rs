use embargo_shared::types::NodeId;
use thiserror::Error;

/// Represents errors that can occur while saving an embargo record.
///
/// A save that violates the reference to the embargoed node is reported
/// separately so callers can tell a dangling legacy row from a broken store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Embargoed node does not exist: {0}")]
    MissingNode(NodeId),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

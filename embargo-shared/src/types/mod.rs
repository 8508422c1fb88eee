mod embargo;
mod source_row;

pub use embargo::{EmbargoRecord, EmbargoType, ExpirationType, RecordId, UnknownCode};
pub use source_row::{SourceRow, expiration_date_of};

/// Identifier of a content item (a node) in the content-management system.
pub type NodeId = i64;

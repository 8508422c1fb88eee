use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::types::{NodeId, SourceRow};

/// Identifier assigned to an embargo by the destination store.
pub type RecordId = i64;

/// Error returned when a stored code does not map to a known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: i16,
}

/// What an embargo restricts.
///
/// Codes match the constants used by the content system's embargo entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EmbargoType {
    /// Restricts the files attached to a node.
    File,
    /// Restricts the node itself.
    Node,
}

impl EmbargoType {
    pub fn code(self) -> i16 {
        match self {
            EmbargoType::File => 0,
            EmbargoType::Node => 1,
        }
    }
}

impl TryFrom<i16> for EmbargoType {
    type Error = UnknownCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(EmbargoType::File),
            1 => Ok(EmbargoType::Node),
            _ => Err(UnknownCode { kind: "embargo type", code }),
        }
    }
}

/// How an embargo ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpirationType {
    /// Lifted manually.
    Indefinite,
    /// Lifted automatically on the expiration date.
    Scheduled,
}

impl ExpirationType {
    pub fn code(self) -> i16 {
        match self {
            ExpirationType::Indefinite => 0,
            ExpirationType::Scheduled => 1,
        }
    }
}

impl TryFrom<i16> for ExpirationType {
    type Error = UnknownCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ExpirationType::Indefinite),
            1 => Ok(ExpirationType::Scheduled),
            _ => Err(UnknownCode { kind: "expiration type", code }),
        }
    }
}

/// An embargo to be created in the destination store.
///
/// Plain data: persistence goes through a repository. `expiration_date` holds
/// the date portion of the legacy expiry value exactly as it was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbargoRecord {
    pub embargo_type: EmbargoType,
    pub expiration_type: ExpirationType,
    pub expiration_date: String,
    pub embargoed_node: NodeId,
}

impl EmbargoRecord {
    /// Builds the file-level, scheduled embargo that replaces a legacy expiry row.
    pub fn from_source_row(row: &SourceRow) -> Self {
        Self {
            embargo_type: EmbargoType::File,
            expiration_type: ExpirationType::Scheduled,
            expiration_date: row.expiration_date().to_string(),
            embargoed_node: row.entity_id,
        }
    }
}

impl From<&SourceRow> for EmbargoRecord {
    fn from(row: &SourceRow) -> Self {
        Self::from_source_row(row)
    }
}

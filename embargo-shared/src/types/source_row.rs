use serde::{Deserialize, Serialize};
use crate::types::NodeId;

/// A row of the legacy `node__field_embargo_expiry` table.
///
/// Associates a content item with the raw embargo expiry value stored by the
/// old field. The value is usually an ISO-8601 timestamp such as
/// `2024-03-15T00:00:00`, but plain dates are also found in the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceRow {
    pub entity_id: NodeId,
    pub expiry_value: String,
}

impl SourceRow {
    pub fn new(entity_id: NodeId, expiry_value: impl Into<String>) -> Self {
        Self {
            entity_id,
            expiry_value: expiry_value.into(),
        }
    }

    /// The date portion of the expiry value.
    pub fn expiration_date(&self) -> &str {
        expiration_date_of(&self.expiry_value)
    }
}

/// Returns the part of `expiry_value` preceding the first `T`.
///
/// When the value carries no time component the whole string is returned
/// unchanged. No further validation happens here; the destination store
/// decides whether the result is a valid date.
pub fn expiration_date_of(expiry_value: &str) -> &str {
    match expiry_value.split_once('T') {
        Some((date, _)) => date,
        None => expiry_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_time_component() {
        assert_eq!(expiration_date_of("2024-03-15T00:00:00"), "2024-03-15");
    }

    #[test]
    fn test_value_without_time_is_unchanged() {
        assert_eq!(expiration_date_of("2025-01-01"), "2025-01-01");
    }

    #[test]
    fn test_only_first_separator_counts() {
        assert_eq!(expiration_date_of("2024-03-15T10:00:00T"), "2024-03-15");
        assert_eq!(expiration_date_of("T12:00:00"), "");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(expiration_date_of(""), "");
    }

    #[test]
    fn test_source_row_expiration_date() {
        let row = SourceRow::new(42, "2024-03-15T00:00:00Z");
        assert_eq!(row.expiration_date(), "2024-03-15");
        assert_eq!(row.entity_id, 42);
    }
}

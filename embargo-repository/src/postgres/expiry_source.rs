//! PostgreSQL implementation of the legacy expiry source.
//!
//! Reads the `node__field_embargo_expiry` field table with a single full scan.

use async_trait::async_trait;
use embargo_shared::types::SourceRow;
use sqlx::Row;
use tracing::debug;

use crate::ExpirySource;
use crate::errors::StorageError;

/// Table holding the legacy embargo expiry field values.
pub const SOURCE_TABLE: &str = "node__field_embargo_expiry";

/// `entity_id` is widened to `BIGINT` so both `int` and `bigint` id columns decode.
const SELECT_EXPIRY_ROWS: &str = "SELECT entity_id::bigint AS entity_id, field_embargo_expiry_value \
     FROM node__field_embargo_expiry";

/// PostgreSQL SQLSTATE for `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";

/// PostgreSQL-backed expiry source.
pub struct PostgresExpirySource {
    pool: sqlx::PgPool,
}

impl PostgresExpirySource {
    /// Creates a new expiry source reading through `pool`.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpirySource for PostgresExpirySource {
    async fn fetch_expiry_rows(&self) -> Result<Vec<SourceRow>, StorageError> {
        let rows = sqlx::query(SELECT_EXPIRY_ROWS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_query_error)?;

        debug!(rows = rows.len(), table = SOURCE_TABLE, "Fetched expiry rows");

        rows.iter()
            .map(|row| -> Result<SourceRow, StorageError> {
                Ok(SourceRow {
                    entity_id: row.try_get("entity_id")?,
                    expiry_value: row.try_get("field_embargo_expiry_value")?,
                })
            })
            .collect()
    }
}

fn map_query_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNDEFINED_TABLE) => {
            StorageError::MissingTable(SOURCE_TABLE.to_string())
        }
        _ => StorageError::DatabaseError(err),
    }
}

//! PostgreSQL implementation of the embargo repository.
//!
//! Each insert runs on its own and commits immediately. Enum fields are stored
//! as their `i16` codes and the expiration date is cast to `date` by the
//! database, so malformed dates are rejected at insert time.

use async_trait::async_trait;
use embargo_shared::types::{EmbargoRecord, RecordId};
use sqlx::Row;

use crate::EmbargoRepository;
use crate::errors::PersistenceError;

const INSERT_EMBARGO: &str = "INSERT INTO embargo (embargo_type, expiration_type, expiration_date, embargoed_node) \
     VALUES ($1, $2, $3::date, $4) RETURNING id";

/// PostgreSQL-backed embargo repository.
pub struct PostgresEmbargoRepository {
    /// PostgreSQL connection pool
    pool: sqlx::PgPool,
}

impl PostgresEmbargoRepository {
    /// Creates a new PostgreSQL repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Connection pool for a database with the `embargo` table
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmbargoRepository for PostgresEmbargoRepository {
    async fn insert(&self, record: &EmbargoRecord) -> Result<RecordId, PersistenceError> {
        let row = sqlx::query(INSERT_EMBARGO)
            .bind(record.embargo_type.code())
            .bind(record.expiration_type.code())
            .bind(&record.expiration_date)
            .bind(record.embargoed_node)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_insert_error(err, record))?;

        Ok(row.try_get("id")?)
    }
}

fn map_insert_error(err: sqlx::Error, record: &EmbargoRecord) -> PersistenceError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            PersistenceError::MissingNode(record.embargoed_node)
        }
        _ => PersistenceError::DatabaseError(err),
    }
}

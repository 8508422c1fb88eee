//! This module defines the `RecordMigrator`, which copies every legacy embargo
//! expiry row into a new embargo record.
//!
//! The run is a single sequential pass: one read of the source, then one insert
//! per row, each awaited before the next row is handled. The first failure ends
//! the run. Records saved before the failure are kept, and running the
//! migration again creates duplicates.
use std::sync::Arc;
use std::time::Duration;

use embargo_repository::{EmbargoRepository, ExpirySource};
use embargo_shared::types::EmbargoRecord;
use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::errors::MigrationError;

/// Counts reported at the end of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MigrationReport {
    pub source_rows: usize,
    pub records_created: usize,
}

/// `RecordMigrator` reads legacy expiry rows and persists one embargo per row.
pub struct RecordMigrator {
    source: Arc<dyn ExpirySource>,
    repository: Arc<dyn EmbargoRepository>,
}

impl RecordMigrator {
    /// Creates a new `RecordMigrator` over explicit store handles.
    ///
    /// # Arguments
    ///
    /// * `source` - Read-only access to the legacy expiry field
    /// * `repository` - Destination for the new embargo records
    pub fn new(source: Arc<dyn ExpirySource>, repository: Arc<dyn EmbargoRepository>) -> Self {
        Self { source, repository }
    }

    /// Runs the migration to completion.
    ///
    /// # Returns
    ///
    /// A `MigrationReport` on success. `MigrationError::Storage` if the source
    /// cannot be read, in which case nothing was written, or
    /// `MigrationError::Persistence` for the first record the store rejects.
    pub async fn run(&self) -> Result<MigrationReport, MigrationError> {
        self.run_until(None).await
    }

    /// Runs the migration, giving up once `timeout` has elapsed.
    ///
    /// The deadline bounds the source read and is checked before each insert.
    /// An insert that has started always runs to completion, so every saved
    /// embargo is counted and logged. With `None` this is the same as
    /// [`RecordMigrator::run`].
    pub async fn run_with_timeout(
        &self,
        timeout: Option<Duration>,
    ) -> Result<MigrationReport, MigrationError> {
        let deadline = timeout.map(|limit| (Instant::now() + limit, limit));
        self.run_until(deadline).await
    }

    async fn run_until(
        &self,
        deadline: Option<(Instant, Duration)>,
    ) -> Result<MigrationReport, MigrationError> {
        let start_time = Instant::now();

        let fetch = self.source.fetch_expiry_rows();
        let fetched = match deadline {
            Some((at, limit)) => match tokio::time::timeout_at(at, fetch).await {
                Ok(result) => result,
                Err(_) => return Err(timed_out(limit, 0)),
            },
            None => fetch.await,
        };
        let rows = fetched.inspect_err(|e| {
            error!(error = %e, "Failed to read legacy embargo expiry rows");
        })?;
        info!(rows = rows.len(), "Read legacy embargo expiry rows");

        let mut report = MigrationReport {
            source_rows: rows.len(),
            records_created: 0,
        };

        for row in &rows {
            if let Some((at, limit)) = deadline {
                if Instant::now() >= at {
                    return Err(timed_out(limit, report.records_created));
                }
            }

            let record = EmbargoRecord::from_source_row(row);

            let embargo_id = self.repository.insert(&record).await.inspect_err(|e| {
                error!(
                    error = %e,
                    node = record.embargoed_node,
                    expiry_value = %row.expiry_value,
                    records_created = report.records_created,
                    "Failed to save embargo, stopping migration"
                );
            })?;

            debug!(
                embargo_id,
                node = record.embargoed_node,
                expiration_date = %record.expiration_date,
                "Created embargo"
            );
            report.records_created += 1;
        }

        info!(
            source_rows = report.source_rows,
            records_created = report.records_created,
            elapsed_secs = start_time.elapsed().as_secs_f64(),
            "Embargo migration complete"
        );

        Ok(report)
    }
}

fn timed_out(limit: Duration, records_created: usize) -> MigrationError {
    error!(
        timeout_secs = limit.as_secs(),
        records_created, "Embargo migration timed out"
    );
    MigrationError::Timeout(limit.as_secs())
}

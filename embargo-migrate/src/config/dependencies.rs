use std::sync::Arc;

use embargo_repository::{PostgresEmbargoRepository, PostgresExpirySource};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::MigrationConfig;
use crate::errors::MigrationError;
use crate::migrator::RecordMigrator;

/// PostgreSQL connection pool size. The migration issues one statement at a time.
pub const PG_MAX_CONNECTIONS: u32 = 5;

/// `Dependencies` holds the components needed for a migration run.
pub struct Dependencies {
    pub migrator: RecordMigrator,
}

impl Dependencies {
    /// Connects to PostgreSQL and builds a migrator over it.
    ///
    /// The expiry source and the embargo repository share one pool.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `MigrationError::Database` if the pool cannot be created.
    pub async fn new(config: &MigrationConfig) -> Result<Self, MigrationError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_MAX_CONNECTIONS)
            .connect(&config.database_url)
            .await
            .map_err(MigrationError::Database)?;

        info!(max_connections = PG_MAX_CONNECTIONS, "Connected to PostgreSQL");

        let migrator = RecordMigrator::new(
            Arc::new(PostgresExpirySource::new(pool.clone())),
            Arc::new(PostgresEmbargoRepository::new(pool)),
        );

        Ok(Dependencies { migrator })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dependencies_new_invalid_database_url() {
        let config = MigrationConfig {
            database_url: "invalid-database-url".to_string(),
            timeout: None,
        };

        let result = Dependencies::new(&config).await;

        if let Err(MigrationError::Database(_)) = result {
            // Expected error type - test passes
        } else {
            panic!("Expected Database error");
        }
    }
}

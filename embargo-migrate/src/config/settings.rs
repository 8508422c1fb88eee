//! Environment-driven settings for both commands.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::MigrationError;

/// Default path of the exported embargo CSV (`pid,embargo`).
const DEFAULT_EMBARGO_CSV: &str = "embargoes.csv";

/// Default path of the node id map (`nid,pid`).
const DEFAULT_PIDS_CSV: &str = "pids.csv";

/// Default path of the revision id map (`vid,pid`).
const DEFAULT_REVISIONS_CSV: &str = "revisions.csv";

/// Default path of the generated SQL.
const DEFAULT_OUTPUT_SQL: &str = "update.sql";

/// Settings for `embargo-migrate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    /// PostgreSQL URL shared by the expiry source and the embargo store.
    pub database_url: String,
    /// Upper bound for the whole run. `None` means no limit.
    pub timeout: Option<Duration>,
}

impl MigrationConfig {
    /// Load settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: PostgreSQL connection URL (required)
    /// - `MIGRATION_TIMEOUT_SECS`: overall timeout in seconds (optional)
    pub fn from_env() -> Result<Self, MigrationError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| MigrationError::Config("DATABASE_URL must be set".to_string()))?;

        let timeout = match env::var("MIGRATION_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    MigrationError::Config(format!("Invalid MIGRATION_TIMEOUT_SECS: {raw:?}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            timeout,
        })
    }
}

/// Settings for `embargo-expiry-sql`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub embargo_csv: PathBuf,
    pub pids_csv: PathBuf,
    pub revisions_csv: PathBuf,
    pub output_sql: PathBuf,
}

impl SeedConfig {
    /// Load paths from `EMBARGO_CSV`, `PIDS_CSV`, `REVISIONS_CSV` and
    /// `OUTPUT_SQL`, falling back to files in the working directory.
    pub fn from_env() -> Self {
        Self {
            embargo_csv: path_from_env("EMBARGO_CSV", DEFAULT_EMBARGO_CSV),
            pids_csv: path_from_env("PIDS_CSV", DEFAULT_PIDS_CSV),
            revisions_csv: path_from_env("REVISIONS_CSV", DEFAULT_REVISIONS_CSV),
            output_sql: path_from_env("OUTPUT_SQL", DEFAULT_OUTPUT_SQL),
        }
    }
}

fn path_from_env(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

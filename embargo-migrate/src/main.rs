use dotenv::dotenv;
use embargo_migrate::logging::init_tracing;
use embargo_migrate::{Dependencies, MigrationConfig, MigrationError};
use tracing::{error, info};

/// Main entry point for the embargo migration.
///
/// Takes no arguments. Exits with a non-zero status if any error stops the
/// run, leaving whatever embargoes were already saved in place.
#[tokio::main]
async fn main() -> Result<(), MigrationError> {
    dotenv().ok();

    init_tracing("embargo-migrate");

    info!("Starting embargo migration");

    let config = MigrationConfig::from_env().inspect_err(|e| {
        error!(error = %e, "Invalid configuration");
    })?;

    let deps = match Dependencies::new(&config).await {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    match deps.migrator.run_with_timeout(config.timeout).await {
        Ok(report) => {
            info!(
                source_rows = report.source_rows,
                records_created = report.records_created,
                "Embargo migration completed successfully"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Embargo migration failed");
            Err(e)
        }
    }
}

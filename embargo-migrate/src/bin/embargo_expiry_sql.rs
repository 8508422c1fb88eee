// Expiry SQL generator - turns an embargo export into inserts for the legacy field tables
use dotenv::dotenv;
use embargo_migrate::logging::init_tracing;
use embargo_migrate::{SeedConfig, SeedError, seed};
use tracing::{error, info};

fn main() -> Result<(), SeedError> {
    dotenv().ok();

    init_tracing("embargo-expiry-sql");

    let config = SeedConfig::from_env();
    info!(
        embargo_csv = %config.embargo_csv.display(),
        pids_csv = %config.pids_csv.display(),
        revisions_csv = %config.revisions_csv.display(),
        "Generating embargo expiry SQL"
    );

    seed::run(&config).map(|_| ()).inspect_err(|e| {
        error!(error = %e, "Embargo expiry SQL generation failed");
    })
}

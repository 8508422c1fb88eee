//! Tracing setup shared by both binaries.

use std::env;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "embargo_migrate=info,embargo_repository=info";

/// Initialize tracing/logging.
///
/// `LOG_FORMAT=json` switches to structured JSON lines; anything else uses
/// pretty console output.
pub fn init_tracing(service_name: &'static str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).pretty())
            .init();
    }

    info!(
        service_name,
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );
}

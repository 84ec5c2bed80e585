//! Structured logging.
//!
//! JSON output in production, human-readable output in development.
//! `RUST_LOG` overrides the default filter in either mode.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

/// Default filter directive for an environment.
pub fn default_filter(environment: Environment) -> &'static str {
    if environment.is_development() {
        "asset_angel_backend=debug,tower_http=debug"
    } else {
        "asset_angel_backend=info,tower_http=info"
    }
}

/// Install the global tracing subscriber.
pub fn init(environment: Environment, filter: Option<&str>) {
    let filter = filter
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter(environment)));

    let registry = tracing_subscriber::registry().with(filter);

    if environment.is_development() {
        registry.with(fmt::layer()).init();
    } else {
        registry.with(fmt::layer().json()).init();
    }
}

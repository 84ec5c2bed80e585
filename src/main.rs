//! Asset Angel backend API.
//!
//! ```text
//!     Client Request     ┌──────────┐    ┌────────────────────────────┐    ┌────────┐
//!     ──────────────────▶│   net    │───▶│ http server                │───▶│ routes │
//!                        │ listener │    │ request-id, trace, cors,   │    │        │
//!     Client Response    │          │◀───│ timeout, metrics           │◀───│        │
//!     ◀──────────────────└──────────┘    └────────────────────────────┘    └────────┘
//!
//!     config (env + .env) ─▶ lifecycle::startup ─▶ observability (logs, metrics)
//! ```

use asset_angel_backend::config::{self, Environment};
use asset_angel_backend::lifecycle;
use asset_angel_backend::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            let filter = std::env::var("RUST_LOG").ok();
            logging::init(Environment::default(), filter.as_deref());
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    logging::init(
        config.environment,
        config.observability.log_filter.as_deref(),
    );

    tracing::info!("asset-angel-backend v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = lifecycle::start(config).await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

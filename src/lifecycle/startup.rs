//! Startup orchestration.
//!
//! Stopped → listening is the only transition. Any error on the way is
//! returned to `main`, which exits non-zero.

use std::net::{AddrParseError, SocketAddr};

use metrics_exporter_prometheus::BuildError;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::lifecycle::signals::shutdown_signal;
use crate::net::{self, ListenerError};
use crate::observability::metrics;

/// Fatal startup errors.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] BuildError),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bring the service up and serve until SIGINT/SIGTERM.
pub async fn start(config: AppConfig) -> Result<(), StartupError> {
    tracing::info!(
        environment = %config.environment,
        debug = config.debug(),
        bind_address = %config.listener.bind_address(),
        cors_origin = %config.cors.origin,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    tracing::info!(
        database = %config.database.target(),
        user = %config.database.user,
        "Database configured (not connected)"
    );

    if let Some(addr) = &config.observability.metrics_address {
        let addr: SocketAddr = addr.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = net::bind(&config.listener).await?;

    HttpServer::new(config)
        .run(listener, shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

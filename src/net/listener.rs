//! TCP listener setup.
//!
//! # Responsibilities
//! - Bind to the configured host and port
//! - Surface bind failures (port in use, bad host) as a typed error

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind a TCP listener to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let addr = config.bind_address();

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ListenerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { addr, source })?;

    tracing::info!(address = %local_addr, "Listener bound");

    Ok(listener)
}

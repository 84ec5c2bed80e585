//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles parsing)
//! - Validate value ranges (timeouts > 0, ports valid)
//! - Check the CORS origin is a usable origin
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use axum::http::HeaderValue;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("port must be between 1 and 65535, got {0}")]
    InvalidPort(u16),

    #[error("host must not be empty")]
    InvalidHost,

    #[error("request timeout must be greater than zero")]
    InvalidTimeout,

    #[error("invalid CORS origin {origin:?}: {reason}")]
    InvalidCorsOrigin { origin: String, reason: String },

    #[error("invalid metrics address {0:?}")]
    InvalidMetricsAddress(String),
}

/// Validate a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::InvalidPort(config.listener.port));
    }

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::InvalidHost);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::InvalidTimeout);
    }

    if !config.cors.allows_any() {
        if let Err(reason) = check_origin(&config.cors.origin) {
            errors.push(ValidationError::InvalidCorsOrigin {
                origin: config.cors.origin.clone(),
                reason,
            });
        }
    }

    if let Some(addr) = &config.observability.metrics_address {
        if addr.parse::<std::net::SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidMetricsAddress(addr.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// An origin is `scheme://host[:port]` with no path, query or fragment.
fn check_origin(origin: &str) -> Result<(), String> {
    let url = Url::parse(origin).map_err(|e| e.to_string())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme {:?}", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err("origin must not contain a path, query or fragment".to_string());
    }
    let canonical = url.origin().ascii_serialization();
    if origin != canonical {
        return Err(format!("origin is not in canonical form (expected {canonical})"));
    }
    HeaderValue::from_str(origin).map_err(|e| e.to_string())?;

    Ok(())
}

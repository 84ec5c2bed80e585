//! Cross-origin policy.
//!
//! A single allow-list origin. Requests from that origin get a matching
//! `access-control-allow-origin`; any other origin gets none.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Methods a browser may use cross-origin.
pub const ALLOWED_METHODS: [Method; 7] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::OPTIONS,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Build the CORS layer for the configured origin.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(config))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request())
}

fn allow_origin(config: &CorsConfig) -> AllowOrigin {
    if config.allows_any() {
        return AllowOrigin::any();
    }

    match HeaderValue::from_str(&config.origin) {
        Ok(origin) => AllowOrigin::list([origin]),
        Err(e) => {
            tracing::warn!(
                origin = %config.origin,
                error = %e,
                "CORS origin is not a valid header value, cross-origin requests will be refused"
            );
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    }
}

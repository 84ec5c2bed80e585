//! API routes.
//!
//! ```text
//! GET /                 → health::home
//! GET /api/v1/health    → health::health
//! /api/v1/users/*       → users (no handlers yet)
//! ```

pub mod health;
pub mod users;

use axum::{routing::get, Router};

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/api/v1/health";

/// All application routes, without middleware.
pub fn router() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health::health))
        .route("/", get(health::home))
        .merge(users::router())
}

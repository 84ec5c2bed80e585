//! Status endpoints.
//!
//! Both handlers ignore the request entirely and return a constant payload.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const HEALTH_STATUS: &str = "Backend is running";
pub const HOME_MESSAGE: &str = "Asset Angel Backend API";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
}

/// `GET /api/v1/health`
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: HEALTH_STATUS,
        }),
    )
}

/// `GET /`
pub async fn home() -> (StatusCode, Json<HomeResponse>) {
    (
        StatusCode::OK,
        Json(HomeResponse {
            message: HOME_MESSAGE,
        }),
    )
}

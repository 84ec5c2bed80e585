//! User resource routes.
//!
//! No handlers are registered yet, so every user path is a 404.

use axum::Router;

pub fn router() -> Router {
    Router::new()
}

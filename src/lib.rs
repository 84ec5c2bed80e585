//! Asset Angel backend library.
//!
//! Configuration, HTTP server and lifecycle for the backend API process.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routes;

pub use config::AppConfig;
pub use http::HttpServer;

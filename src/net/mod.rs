//! Network layer.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (resolve and bind TCP socket)
//!     → tokio TcpListener handed to the HTTP server
//! ```
//!
//! # Design Decisions
//! - Bind failures are fatal: no retry, no fallback port

pub mod listener;

pub use listener::{bind, ListenerError};

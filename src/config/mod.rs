//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional) + process environment
//!     → loader.rs (read variables, parse typed values)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → moved into the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is read exactly once, at process start
//! - Every field has a default so an empty environment is a valid config
//! - Parsing errors (bad integers) are separate from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from, ConfigError};
pub use schema::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, ListenerConfig, ObservabilityConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};

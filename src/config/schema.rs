//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! Defaults mirror what the service does when no variable is set.

use serde::Serialize;
use std::fmt;

/// Default allow-list origin, the Vite dev server of the frontend.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Root configuration for the backend.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AppConfig {
    /// Environment mode (development or production).
    pub environment: Environment,

    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Cross-origin policy.
    pub cors: CorsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Database connection placeholder. Parsed, never connected.
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Debug mode is on only in development.
    pub fn debug(&self) -> bool {
        self.environment.is_development()
    }
}

/// Environment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Map a mode string to an environment.
    ///
    /// Only the exact literal `development` selects development mode. Anything
    /// else, typos included, is treated as production.
    pub fn from_mode(mode: &str) -> Self {
        if mode == "development" {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ListenerConfig {
    /// Host to bind (e.g., "127.0.0.1").
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string handed to the socket layer.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Cross-origin policy configuration.
#[derive(Debug, Clone, Serialize)]
pub struct CorsConfig {
    /// The single permitted origin, or `*` for any.
    pub origin: String,
}

impl CorsConfig {
    pub fn allows_any(&self) -> bool {
        self.origin == "*"
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Serialize)]
pub struct TimeoutConfig {
    /// Total request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ObservabilityConfig {
    /// Log filter directive; `None` falls back to the environment default.
    pub log_filter: Option<String>,

    /// Prometheus scrape endpoint bind address. Metrics are off when unset.
    pub metrics_address: Option<String>,
}

/// Database connection settings.
///
/// Nothing opens a connection with these yet; they are carried so the
/// deployment environment can already provide them.
#[derive(Clone, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// `host:port/name`, safe to log.
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.name)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            name: "asset_angel".to_string(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

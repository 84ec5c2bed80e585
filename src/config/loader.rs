//! Configuration loading from the environment.

use std::str::FromStr;

use crate::config::schema::{AppConfig, Environment};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to read .env file: {0}")]
    DotEnv(#[source] dotenvy::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from `.env` and the process environment.
///
/// Variables already set in the environment take precedence over `.env`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(ConfigError::DotEnv(e)),
    }

    load_from(|key| std::env::var(key).ok())
}

/// Build and validate configuration from an arbitrary variable lookup.
pub fn load_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = AppConfig::default();

    let mode = lookup("APP_ENV").or_else(|| lookup("FLASK_ENV"));
    if let Some(mode) = mode {
        config.environment = Environment::from_mode(&mode);
    }

    if let Some(origin) = lookup("CORS_ORIGIN") {
        config.cors.origin = origin;
    }
    if let Some(host) = lookup("HOST") {
        config.listener.host = host;
    }
    if let Some(port) = parse_var(&lookup, "PORT")? {
        config.listener.port = port;
    }
    if let Some(secs) = parse_var(&lookup, "REQUEST_TIMEOUT_SECS")? {
        config.timeouts.request_secs = secs;
    }

    config.observability.log_filter = lookup("RUST_LOG");
    config.observability.metrics_address = lookup("METRICS_ADDRESS").filter(|a| !a.is_empty());

    if let Some(host) = lookup("DB_HOST") {
        config.database.host = host;
    }
    if let Some(port) = parse_var(&lookup, "DB_PORT")? {
        config.database.port = port;
    }
    if let Some(user) = lookup("DB_USER") {
        config.database.user = user;
    }
    if let Some(password) = lookup("DB_PASSWORD") {
        config.database.password = password;
    }
    if let Some(name) = lookup("DB_NAME") {
        config.database.name = name;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidVar {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.debug());
        assert_eq!(config.cors.origin, "http://localhost:5173");
        assert_eq!(config.listener.port, 5000);
        assert!(config.observability.metrics_address.is_none());
    }

    #[test]
    fn test_reads_core_variables() {
        let config = load(&[
            ("FLASK_ENV", "production"),
            ("CORS_ORIGIN", "https://assets.example.com"),
            ("PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert!(!config.debug());
        assert_eq!(config.cors.origin, "https://assets.example.com");
        assert_eq!(config.listener.port, 8080);
    }

    #[test]
    fn test_app_env_takes_precedence_over_flask_env() {
        let config = load(&[("APP_ENV", "production"), ("FLASK_ENV", "development")]).unwrap();
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_unknown_mode_is_not_debug() {
        let config = load(&[("FLASK_ENV", "developmnet")]).unwrap();
        assert!(!config.debug());
    }

    #[test]
    fn test_malformed_port_is_rejected() {
        let err = load(&[("PORT", "fifty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: "PORT", .. }));

        let err = load(&[("PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: "PORT", .. }));
    }

    #[test]
    fn test_port_zero_fails_validation() {
        let err = load(&[("PORT", "0")]).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors, vec![ValidationError::InvalidPort(0)]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_database_placeholder_fields() {
        let config = load(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "3307"),
            ("DB_USER", "angel"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "assets"),
        ])
        .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.user, "angel");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.name, "assets");
    }

    #[test]
    fn test_malformed_db_port_is_rejected() {
        let err = load(&[("DB_PORT", "mysql")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { var: "DB_PORT", .. }));
        assert!(err.to_string().contains("DB_PORT"));
    }

    #[test]
    fn test_empty_metrics_address_disables_metrics() {
        let config = load(&[("METRICS_ADDRESS", "")]).unwrap();
        assert!(config.observability.metrics_address.is_none());
    }
}

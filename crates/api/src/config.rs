//! Application configuration loaded from environment variables.

use common::env_keys;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `APP_ENV` — deployment environment label (default: `"development"`)
/// - `DATASTORE_URL` — connection URL for the external data store
/// - `DATASTORE_SERVICE_KEY` — access key for the external data store
///
/// The datastore values are optional here: a missing URL produces an
/// unconfigured probe that reports unhealthy, rather than a startup crash.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub environment: String,
    pub datastore_url: Option<String>,
    pub datastore_service_key: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            datastore_url: std::env::var(env_keys::DATASTORE_URL).ok(),
            datastore_service_key: std::env::var(env_keys::DATASTORE_SERVICE_KEY).ok(),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            environment: "development".to_string(),
            datastore_url: None,
            datastore_service_key: None,
        }
    }
}

//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables.
//! `DATABASE_URL` is required; the listen address has defaults matching the
//! development setup.

use std::env;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(key) => {
                write!(formatter, "Missing environment variable: {key}")
            }
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration.
///
/// # Fields
///
/// - `database_url`: SQLite connection string for the task store
/// - `app_host`: host address for the HTTP server
/// - `app_port`: port number for the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite connection string, e.g. `sqlite:tasks.db?mode=rwc`.
    pub database_url: String,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: SQLite connection string (required)
    /// - `APP_HOST`: server host (optional, default: `0.0.0.0`)
    /// - `APP_PORT`: server port (optional, default: `3001`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `DATABASE_URL` is not set
    /// and [`ConfigError::InvalidValue`] if `APP_PORT` is not a valid port
    /// number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let app_host = env::var("APP_HOST").unwrap_or_else(|_| Self::default().app_host);

        let app_port = match env::var("APP_PORT") {
            Ok(value) => value.parse().map_err(|error| ConfigError::InvalidValue {
                key: "APP_PORT".to_string(),
                message: format!("{error}"),
            })?,
            Err(_) => Self::default().app_port,
        };

        Ok(Self {
            database_url,
            app_host,
            app_port,
        })
    }

    /// Returns the `host:port` address to bind the HTTP listener to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:tasks.db?mode=rwc".to_string(),
            app_host: "0.0.0.0".to_string(),
            app_port: 3001,
        }
    }
}

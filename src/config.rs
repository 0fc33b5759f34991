//! Server configuration support.
//!
//! Configuration is resolved from environment variables, with an optional
//! TOML file taking precedence when `FLIGHTDESK_CONFIG` names one.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::repository::RepositoryError;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional path to a JSON seed dataset loaded at startup
    #[serde(default)]
    pub seed_data: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_data: None,
        }
    }
}

impl ServerConfig {
    /// Create a server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): Bind host
    /// - `PORT` (optional, default: 8080): Bind port
    /// - `SEED_DATA` (optional): Path to a JSON seed dataset
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| default_host());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| "PORT must be a valid port number".to_string())?,
            Err(_) => default_port(),
        };
        let seed_data = env::var("SEED_DATA").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            seed_data,
        })
    }

    /// Load server configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(RepositoryError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: ServerConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Resolve the active configuration.
    ///
    /// When `FLIGHTDESK_CONFIG` is set, the named TOML file wins; otherwise
    /// the environment variables are used.
    pub fn resolve() -> Result<Self, String> {
        if let Ok(path) = env::var("FLIGHTDESK_CONFIG") {
            return Self::from_file(&path).map_err(|e| e.to_string());
        }
        Self::from_env()
    }

    /// Bind address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.seed_data.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_parse_toml() {
        let config: ServerConfig = toml::from_str(
            r#"
            host = "127.0.0.1"
            port = 9000
            seed_data = "data/seed.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed_data, Some(PathBuf::from("data/seed.json")));
    }

    #[test]
    fn test_parse_toml_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_from_file_missing() {
        let result = ServerConfig::from_file("/nonexistent/flightdesk.toml");
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError { .. })
        ));
    }
}

//! Configuration management for `AirSense`
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and validates settings once at startup. The resulting struct is
//! handed to the upstream client and the web server; nothing reads the
//! environment after this point.

use crate::AirSenseError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "AIRSENSE_CONFIG";

/// Conventional variable for the OpenWeather credential, used as a fallback
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Root configuration structure for the `AirSense` service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirSenseConfig {
    /// Upstream OpenWeather API configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// OpenWeather API key. Absence is reported per request, not at startup.
    pub api_key: Option<String>,
    /// Base URL the geocoding and data endpoints are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built dashboard frontend, served for unmatched paths
    pub static_dir: Option<String>,
    /// PEM certificate chain, used with `tls_key_path` when the `tls` feature is on
    pub tls_cert_path: Option<String>,
    pub tls_key_path: Option<String>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
            tls_cert_path: None,
            tls_key_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl UpstreamConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.into())
    }
}

impl ServerConfig {
    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AirSenseConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(Self::get_config_path);

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // AIRSENSE_UPSTREAM__API_KEY, AIRSENSE_SERVER__PORT, ...
        builder = builder.add_source(
            Environment::with_prefix("AIRSENSE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AirSenseConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config.upstream.api_key.is_none() {
            config.upstream.api_key = env::var(API_KEY_ENV).ok();
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Configuration file path: `AIRSENSE_CONFIG` if set, `airsense.toml` otherwise
    #[must_use]
    pub fn get_config_path() -> PathBuf {
        env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("airsense.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self
            .upstream
            .api_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            self.upstream.api_key = None;
        }
        if self.upstream.base_url.is_empty() {
            self.upstream.base_url = default_base_url();
        }
        self.upstream.base_url = self.upstream.base_url.trim_end_matches('/').to_string();
        if self.upstream.timeout_seconds == 0 {
            self.upstream.timeout_seconds = default_timeout();
        }
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.validate_tls()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.upstream.timeout_seconds > 300 {
            return Err(
                AirSenseError::configuration("Upstream timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.server.port == 0 {
            return Err(AirSenseError::configuration("Server port cannot be 0").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AirSenseError::configuration(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AirSenseError::configuration(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.upstream.base_url.starts_with("http://")
            && !self.upstream.base_url.starts_with("https://")
        {
            return Err(AirSenseError::configuration(
                "Upstream base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }

    fn validate_tls(&self) -> Result<()> {
        match (&self.server.tls_cert_path, &self.server.tls_key_path) {
            (Some(_), None) | (None, Some(_)) => Err(AirSenseError::configuration(
                "TLS requires both tls_cert_path and tls_key_path",
            )
            .into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AirSenseConfig::default();
        assert_eq!(config.upstream.base_url, "https://api.openweathermap.org");
        assert_eq!(config.upstream.timeout_seconds, 10);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.level, "info");
        assert!(config.upstream.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_is_not_a_startup_error() {
        let config = AirSenseConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AirSenseConfig::default();
        config.logging.level = "verbose".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = AirSenseConfig::default();
        config.upstream.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = AirSenseConfig::default();
        config.upstream.base_url = "api.openweathermap.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_partial_tls() {
        let mut config = AirSenseConfig::default();
        config.server.tls_cert_path = Some("cert.pem".to_string());
        assert!(config.validate().is_err());

        config.server.tls_key_path = Some("key.pem".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_defaults() {
        let mut config = AirSenseConfig::default();
        config.upstream.api_key = Some("   ".to_string());
        config.upstream.base_url = "http://localhost:8080/".to_string();
        config.upstream.timeout_seconds = 0;
        config.logging.format = String::new();
        config.apply_defaults();

        assert!(config.upstream.api_key.is_none());
        assert_eq!(config.upstream.base_url, "http://localhost:8080");
        assert_eq!(config.upstream.timeout_seconds, 10);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[upstream]
api_key = "file_api_key_123"
timeout_seconds = 5

[server]
port = 8081

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = AirSenseConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.upstream.api_key.as_deref(), Some("file_api_key_123"));
        assert_eq!(config.upstream.timeout_seconds, 5);
        assert_eq!(config.upstream.base_url, "https://api.openweathermap.org");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();

        let result = AirSenseConfig::load_from_path(Some(file.path().to_path_buf()));
        assert!(result.is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = AirSenseConfig::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.upstream.timeout(), Duration::from_secs(10));
    }
}

//! Configuration management for the MCP server.
//!
//! Configuration is read once from the environment (and an optional `.env`
//! file) at startup. Only the Freepik API key is mandatory; everything else
//! falls back to defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};

/// Environment variable holding the Freepik API key.
pub const API_KEY_ENV: &str = "FREEPIK_API_KEY";

/// Environment variable overriding the Freepik API host.
pub const BASE_URL_ENV: &str = "FREEPIK_BASE_URL";

/// Default Freepik API host.
pub const DEFAULT_BASE_URL: &str = "https://api.freepik.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Freepik API access.
    pub freepik: FreepikConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Freepik API access configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct FreepikConfig {
    /// Value sent in the `x-freepik-api-key` header.
    pub api_key: String,

    /// API host every request is issued against.
    pub base_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for FreepikConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreepikConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for FreepikConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "freepik-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            freepik: FreepikConfig::default(),
        }
    }
}

impl Config {
    /// Build a configuration with defaults and the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.freepik.api_key = api_key.into();
        config
    }

    /// Load configuration from environment variables.
    ///
    /// Fails when `FREEPIK_API_KEY` is missing or blank, or when
    /// `FREEPIK_BASE_URL` is not an absolute URL.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                Error::config(format!("{API_KEY_ENV} environment variable is required"))
            })?;

        let mut config = Self::with_api_key(api_key);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps =
                timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            let trimmed = base_url.trim().trim_end_matches('/');
            reqwest::Url::parse(trimmed)
                .map_err(|e| Error::config(format!("{BASE_URL_ENV} is not a valid URL: {e}")))?;
            info!("Using Freepik API host override: {}", trimmed);
            config.freepik.base_url = trimmed.to_string();
        }

        Ok(config)
    }
}

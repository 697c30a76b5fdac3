//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    store_backends, DEFAULT_CODEFORCES_API_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SHEET_FILE, DEFAULT_SHEET_STORAGE_KEY, DEFAULT_SUBMISSION_COUNT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub redis: RedisConfig,
    pub codeforces: CodeforcesConfig,
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// Codeforces API configuration
#[derive(Debug, Clone)]
pub struct CodeforcesConfig {
    pub base_url: String,
    /// Request timeout; `None` leaves requests unbounded
    pub timeout_secs: Option<u64>,
    /// How many submissions to request per handle check
    pub submission_count: u32,
}

/// Which backend keeps the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    File,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            store_backends::REDIS => Ok(Self::Redis),
            store_backends::FILE => Ok(Self::File),
            store_backends::MEMORY => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidValue("STORE_BACKEND".to_string())),
        }
    }
}

/// Sheet storage configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Path used by the file backend
    pub file_path: PathBuf,
    /// Key the sheet is written under
    pub sheet_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            codeforces: CodeforcesConfig::from_env()?,
            store: StoreConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "cfpicker=info,tower_http=info".to_string()),
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl CodeforcesConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match env::var("CODEFORCES_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("CODEFORCES_TIMEOUT_SECS".to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            base_url: env::var("CODEFORCES_API_URL")
                .unwrap_or_else(|_| DEFAULT_CODEFORCES_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs,
            submission_count: env::var("CODEFORCES_SUBMISSION_COUNT")
                .unwrap_or_else(|_| DEFAULT_SUBMISSION_COUNT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CODEFORCES_SUBMISSION_COUNT".to_string()))?,
        })
    }
}

impl StoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            backend: env::var("STORE_BACKEND")
                .unwrap_or_else(|_| store_backends::FILE.to_string())
                .parse()?,
            file_path: PathBuf::from(
                env::var("SHEET_FILE").unwrap_or_else(|_| DEFAULT_SHEET_FILE.to_string()),
            ),
            sheet_key: env::var("SHEET_STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_SHEET_STORAGE_KEY.to_string()),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("redis".parse::<StoreBackend>().unwrap(), StoreBackend::Redis);
        assert_eq!(" File ".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("postgres".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }
}

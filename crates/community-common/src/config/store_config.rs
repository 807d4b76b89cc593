//! Store configuration
//!
//! Loads configuration from environment variables, with `.env` support.

use serde::Deserialize;
use std::env;

/// Which storage adapter backend to run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdapterBackend {
    /// In-memory adapter; state lives for the process lifetime only
    #[default]
    Memory,
    /// JSON-file adapter; one file per collection under `data_dir`
    JsonFile,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: AdapterBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

/// Main store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    pub storage: StorageConfig,
}

// Default value functions
fn default_app_name() -> String {
    "community-store".to_string()
}

fn default_data_dir() -> String {
    "./data".to_string()
}

impl StoreConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but unparseable
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let backend = match env::var("STORE_BACKEND") {
            Ok(raw) => match raw.to_lowercase().as_str() {
                "memory" => AdapterBackend::Memory,
                "jsonfile" | "json-file" | "json_file" => AdapterBackend::JsonFile,
                _ => return Err(ConfigError::InvalidVar("STORE_BACKEND")),
            },
            Err(_) => AdapterBackend::default(),
        };

        Ok(Self {
            name: env::var("STORE_NAME").unwrap_or_else(|_| default_app_name()),
            storage: StorageConfig {
                backend,
                data_dir: env::var("STORE_DATA_DIR").unwrap_or_else(|_| default_data_dir()),
            },
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable: {0}")]
    InvalidVar(&'static str),
}

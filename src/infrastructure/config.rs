// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS,
    STORE_FILE_NAME,
};

/// TOML configuration for pharmatc
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StoreConfig {
    /// Saved-drug list file. Empty means the platform data directory.
    #[serde(default = "default_store_path")]
    pub path: String,
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}
fn default_store_path() -> String {
    String::new()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration from the default location, falling back to
    /// built-in defaults when no file exists
    pub fn load_default() -> Result<Self> {
        let path = default_config_path()?;
        if path.exists() {
            Config::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Resolve where the saved-drug list lives: an explicit configured
    /// path wins over the platform data directory
    pub fn resolved_store_path(&self) -> Result<PathBuf> {
        if !self.store.path.trim().is_empty() {
            return Ok(PathBuf::from(&self.store.path));
        }

        let data_dir = dirs::data_dir().context("Could not find user data directory")?;
        Ok(data_dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
    }
}

/// Default config file location under the platform config directory
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find user config directory")?;
    Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

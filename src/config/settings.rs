use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::Paths;
use crate::cache::DEFAULT_TTL_SECS;
use crate::error::{CatalogError, Result};

/// Dataset location used when nothing else is configured
pub const DEFAULT_DATA_PATH: &str = "data/apps.json";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Dataset-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the dataset file
    pub path: Option<PathBuf>,
}

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a loaded dataset stays valid, in seconds
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
}

fn default_ttl() -> u64 {
    DEFAULT_TTL_SECS
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
        }
    }
}

/// Output formatting preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific paths instance
    pub fn save_to(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, contents)?;
        Ok(())
    }

    /// Dataset path: the override if given, else the configured path, else the default
    pub fn data_path(&self, override_path: Option<&PathBuf>) -> PathBuf {
        override_path
            .cloned()
            .or_else(|| self.data.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    /// Set a value by its dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data.path" => {
                if value.trim().is_empty() {
                    return Err(CatalogError::InvalidArgument(
                        "data.path cannot be empty".to_string(),
                    ));
                }
                self.data.path = Some(PathBuf::from(value));
            }
            "cache.ttl_secs" => {
                self.cache.ttl_secs = value.parse().map_err(|_| {
                    CatalogError::InvalidArgument(format!(
                        "cache.ttl_secs must be a whole number of seconds, got '{}'",
                        value
                    ))
                })?;
            }
            "output.format" => {
                if value != "pretty" && value != "json" {
                    return Err(CatalogError::InvalidArgument(
                        "output.format must be 'pretty' or 'json'".to_string(),
                    ));
                }
                self.output.format = value.to_string();
            }
            _ => {
                return Err(CatalogError::InvalidArgument(format!(
                    "Unknown config key: {}. Valid keys: data.path, cache.ttl_secs, output.format",
                    key
                )));
            }
        }
        Ok(())
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the host
//! configuration from YAML.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, FuelConfig, ServerConfig, StorageConfig};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to the host configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── engine.yaml   # server, storage and fuel sections
/// ```
///
/// # Example
///
/// ```no_run
/// use trip_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Listening on {}", loader.server().bind_address());
/// # Ok::<(), trip_ledger::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from `engine.yaml` in the specified directory.
    ///
    /// Fails with [`EngineError::ConfigNotFound`] when the file cannot be
    /// read and [`EngineError::ConfigParseError`] when it is not valid YAML
    /// for [`EngineConfig`]. Missing sections and fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<EngineConfig>(&config_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the HTTP listener section.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the storage section.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.storage
    }

    /// Returns the fuel display section.
    pub fn fuel(&self) -> &FuelConfig {
        &self.config.fuel
    }

    /// Mpg used for the display estimate when lifetime counters are missing.
    ///
    /// A non-positive or non-finite configured value falls back to the
    /// built-in 6.8.
    pub fn display_fallback_mpg(&self) -> f64 {
        let mpg = self.config.fuel.fallback_mpg;
        if mpg.is_finite() && mpg > 0.0 {
            mpg
        } else {
            FuelConfig::default().fallback_mpg
        }
    }
}

//! Configuration types for the Trip Ledger host.
//!
//! These structures are deserialized from `engine.yaml`. Every section has
//! defaults so a partial file is valid.

use serde::Deserialize;

use crate::calculation::LIFETIME_FALLBACK_MPG;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "./data/settings.json";
/// Default lifetime counters file, relative to the working directory.
pub const DEFAULT_LIFETIME_PATH: &str = "./data/lifetime.json";

/// Where the HTTP host listens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Locations of the persisted JSON records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Cost settings file.
    pub settings_path: String,
    /// Lifetime odometer and fuel counters file.
    pub lifetime_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_path: DEFAULT_SETTINGS_PATH.to_string(),
            lifetime_path: DEFAULT_LIFETIME_PATH.to_string(),
        }
    }
}

/// Fuel display options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FuelConfig {
    /// Mpg shown when lifetime counters are missing.
    pub fallback_mpg: f64,
}

impl Default for FuelConfig {
    fn default() -> Self {
        Self {
            fallback_mpg: LIFETIME_FALLBACK_MPG,
        }
    }
}

/// The full `engine.yaml` document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Persistence paths.
    pub storage: StorageConfig,
    /// Fuel display options.
    pub fuel: FuelConfig,
}

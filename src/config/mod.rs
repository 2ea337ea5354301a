//! Configuration loading for the Trip Ledger host.
//!
//! This module loads `engine.yaml`, which tells the binary where to listen,
//! where the settings and lifetime counters are persisted, and which mpg to
//! display before any fuel has been logged.
//!
//! # Example
//!
//! ```no_run
//! use trip_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Settings stored at {}", config.storage().settings_path);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    DEFAULT_HOST, DEFAULT_LIFETIME_PATH, DEFAULT_PORT, DEFAULT_SETTINGS_PATH, EngineConfig,
    FuelConfig, ServerConfig, StorageConfig,
};

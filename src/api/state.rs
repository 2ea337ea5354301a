//! Application state for the Trip Ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{
    InMemoryLifetimeStore, InMemorySettingsStore, JsonFileLifetimeStore, JsonFileSettingsStore,
    LifetimeFuelStore, SettingsStore,
};

/// Shared application state.
///
/// Holds the loaded host configuration and the two persistence
/// collaborators the engine reads from.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    settings: Arc<dyn SettingsStore>,
    lifetime: Arc<dyn LifetimeFuelStore>,
}

impl AppState {
    /// Creates a new application state from its parts.
    pub fn new(
        config: ConfigLoader,
        settings: Arc<dyn SettingsStore>,
        lifetime: Arc<dyn LifetimeFuelStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            settings,
            lifetime,
        }
    }

    /// Creates state backed by the JSON files named in the storage section.
    pub fn from_config(config: ConfigLoader) -> Self {
        let settings = Arc::new(JsonFileSettingsStore::new(&config.storage().settings_path));
        let lifetime = Arc::new(JsonFileLifetimeStore::new(&config.storage().lifetime_path));
        Self::new(config, settings, lifetime)
    }

    /// Creates state with empty in-memory stores and default configuration.
    pub fn in_memory() -> Self {
        Self::new(
            ConfigLoader::default(),
            Arc::new(InMemorySettingsStore::new()),
            Arc::new(InMemoryLifetimeStore::default()),
        )
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the settings store.
    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    /// Returns the lifetime fuel store.
    pub fn lifetime(&self) -> &dyn LifetimeFuelStore {
        self.lifetime.as_ref()
    }
}

//! In-memory stores, used by tests and by hosts without a data directory.

use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{CostSettings, LifetimeFuelStats};

use super::{LifetimeFuelStore, SettingsStore};

const MEMORY_PATH: &str = "<memory>";

/// Settings held in process memory.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    settings: RwLock<Option<CostSettings>>,
}

impl InMemorySettingsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `settings`.
    pub fn with_settings(settings: CostSettings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> EngineResult<Option<CostSettings>> {
        let guard = self.settings.read().map_err(|e| EngineError::StoreReadError {
            path: MEMORY_PATH.to_string(),
            message: e.to_string(),
        })?;
        Ok(guard.clone())
    }

    fn save(&self, settings: &CostSettings) -> EngineResult<()> {
        let mut guard = self
            .settings
            .write()
            .map_err(|e| EngineError::StoreWriteError {
                path: MEMORY_PATH.to_string(),
                message: e.to_string(),
            })?;
        *guard = Some(settings.clone());
        Ok(())
    }
}

/// Fixed lifetime counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryLifetimeStore {
    stats: LifetimeFuelStats,
}

impl InMemoryLifetimeStore {
    /// Creates a store reporting `stats`.
    pub fn new(stats: LifetimeFuelStats) -> Self {
        Self { stats }
    }
}

impl LifetimeFuelStore for InMemoryLifetimeStore {
    fn read_lifetime_miles(&self) -> EngineResult<f64> {
        Ok(self.stats.lifetime_miles)
    }

    fn read_lifetime_gallons(&self) -> EngineResult<f64> {
        Ok(self.stats.lifetime_gallons)
    }
}

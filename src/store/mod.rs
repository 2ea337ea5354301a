//! Persistence collaborators.
//!
//! The engine only reads from these stores; saving settings is a host
//! action. Both are traits so the host can inject a file-backed store in
//! production and an in-memory one in tests.

mod file;
mod memory;

pub use file::{JsonFileLifetimeStore, JsonFileSettingsStore};
pub use memory::{InMemoryLifetimeStore, InMemorySettingsStore};

use crate::error::{EngineError, EngineResult};
use crate::models::{CostSettings, LifetimeFuelStats};

/// Loads and saves the operator's cost settings.
pub trait SettingsStore: Send + Sync {
    /// Loads the saved settings, or `None` when nothing has been saved.
    fn load(&self) -> EngineResult<Option<CostSettings>>;

    /// Persists `settings`, replacing any previous record.
    fn save(&self, settings: &CostSettings) -> EngineResult<()>;

    /// Loads the saved settings, failing with
    /// [`EngineError::SettingsNotFound`] when nothing has been saved.
    fn require(&self) -> EngineResult<CostSettings> {
        self.load()?.ok_or(EngineError::SettingsNotFound)
    }
}

/// Reads the lifetime odometer and fuel counters.
pub trait LifetimeFuelStore: Send + Sync {
    /// Lifetime miles, 0 when never recorded.
    fn read_lifetime_miles(&self) -> EngineResult<f64>;

    /// Lifetime gallons, 0 when never recorded.
    fn read_lifetime_gallons(&self) -> EngineResult<f64>;

    /// Both counters together.
    fn lifetime_stats(&self) -> EngineResult<LifetimeFuelStats> {
        Ok(LifetimeFuelStats {
            lifetime_miles: self.read_lifetime_miles()?,
            lifetime_gallons: self.read_lifetime_gallons()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fails_when_nothing_saved() {
        let store = InMemorySettingsStore::new();
        assert!(matches!(
            store.require(),
            Err(EngineError::SettingsNotFound)
        ));
    }

    #[test]
    fn test_require_returns_saved_settings() {
        let store = InMemorySettingsStore::with_settings(CostSettings::defaults());
        assert_eq!(store.require().unwrap(), CostSettings::defaults());
    }

    #[test]
    fn test_lifetime_stats_combines_counters() {
        let store = InMemoryLifetimeStore::new(LifetimeFuelStats {
            lifetime_miles: 6800.0,
            lifetime_gallons: 1000.0,
        });
        let stats = store.lifetime_stats().unwrap();
        assert_eq!(stats.lifetime_miles, 6800.0);
        assert_eq!(stats.lifetime_gallons, 1000.0);
    }

    #[test]
    fn test_stores_are_object_safe() {
        let settings: Box<dyn SettingsStore> = Box::new(InMemorySettingsStore::new());
        let lifetime: Box<dyn LifetimeFuelStore> =
            Box::new(InMemoryLifetimeStore::new(LifetimeFuelStats::default()));

        assert!(settings.load().unwrap().is_none());
        assert_eq!(lifetime.read_lifetime_miles().unwrap(), 0.0);
    }
}

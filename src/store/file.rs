//! JSON file stores.
//!
//! Settings are kept as a single JSON object with the camelCase field names
//! of [`CostSettings`]. Lifetime counters live in a separate JSON object:
//!
//! ```text
//! data/
//! ├── settings.json   # {"household": 5259, "businessFixed": 1742, ...}
//! └── lifetime.json   # {"lifetimeMiles": 68000, "lifetimeGallons": 10000}
//! ```
//!
//! A missing or unreadable-as-JSON file is treated as "nothing saved", never
//! as an error. Inside a readable file, numeric fields are coerced one by one:
//! null, junk and unparseable strings read as 0 without discarding the rest.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::calculation::lenient_number;
use crate::error::{EngineError, EngineResult};
use crate::models::{CostSettings, LifetimeFuelStats};

use super::{LifetimeFuelStore, SettingsStore};

const LIFETIME_MILES_KEY: &str = "lifetimeMiles";
const LIFETIME_GALLONS_KEY: &str = "lifetimeGallons";

/// Settings persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    /// Creates a store backed by the file at `path`. The file need not exist.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> EngineResult<Option<CostSettings>> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Option<CostSettings>>(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring unparseable settings file"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, settings: &CostSettings) -> EngineResult<()> {
        let path_str = self.path.display().to_string();
        let write_error = |message: String| EngineError::StoreWriteError {
            path: path_str.clone(),
            message,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }

        let json = serde_json::to_string(settings).map_err(|e| write_error(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| write_error(e.to_string()))?;

        debug!(path = %path_str, "Settings saved");
        Ok(())
    }
}

/// Lifetime counters read from a JSON file.
///
/// Counter values may be JSON numbers or numeric strings. Anything else,
/// including a missing file or key, reads as 0.
#[derive(Debug, Clone)]
pub struct JsonFileLifetimeStore {
    path: PathBuf,
}

impl JsonFileLifetimeStore {
    /// Creates a store backed by the file at `path`. The file need not exist.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the counters file once. Missing or unparseable files are `None`.
    fn read_document(&self) -> EngineResult<Option<Value>> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(None);
        };

        match serde_json::from_str(&content) {
            Ok(document) => Ok(Some(document)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring unparseable lifetime counters file"
                );
                Ok(None)
            }
        }
    }

    fn read_counter(&self, key: &str) -> EngineResult<f64> {
        Ok(self
            .read_document()?
            .as_ref()
            .map_or(0.0, |document| counter(document, key)))
    }
}

fn counter(document: &Value, key: &str) -> f64 {
    document.get(key).map_or(0.0, lenient_number)
}

impl LifetimeFuelStore for JsonFileLifetimeStore {
    fn read_lifetime_miles(&self) -> EngineResult<f64> {
        self.read_counter(LIFETIME_MILES_KEY)
    }

    fn read_lifetime_gallons(&self) -> EngineResult<f64> {
        self.read_counter(LIFETIME_GALLONS_KEY)
    }

    fn lifetime_stats(&self) -> EngineResult<LifetimeFuelStats> {
        let Some(document) = self.read_document()? else {
            return Ok(LifetimeFuelStats::default());
        };

        Ok(LifetimeFuelStats {
            lifetime_miles: counter(&document, LIFETIME_MILES_KEY),
            lifetime_gallons: counter(&document, LIFETIME_GALLONS_KEY),
        })
    }
}

/// Reads a file, returning `None` when it does not exist.
fn read_optional(path: &Path) -> EngineResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(EngineError::StoreReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

//! Error types for the Trip Ledger engine.
//!
//! The pure calculation functions never fail; every variant here belongs to
//! the host side of the engine (configuration, persisted stores and request
//! validation). Errors are strongly typed using the `thiserror` crate.

use thiserror::Error;

/// The main error type for the Trip Ledger engine.
///
/// # Example
///
/// ```
/// use trip_ledger::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No cost settings have been saved yet.
    ///
    /// The host must prompt for settings before a trip can be evaluated.
    #[error("Cost settings have not been saved yet")]
    SettingsNotFound,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A persisted store could not be read.
    #[error("Failed to read store '{path}': {message}")]
    StoreReadError {
        /// The location of the store.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A persisted store could not be written.
    #[error("Failed to write store '{path}': {message}")]
    StoreWriteError {
        /// The location of the store.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A trip request contained a value that cannot be evaluated.
    #[error("Invalid trip field '{field}': {message}")]
    InvalidTrip {
        /// The offending field.
        field: String,
        /// What made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Logging configuration for processes embedding todddo.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to the process. [`TelemetryConfig`] bundles the options such a process
//! usually wants and installs a formatted subscriber without panicking.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when neither the caller nor `RUST_LOG` supplies one.
const DEFAULT_FILTER: &str = "info";

/// Errors returned while configuring the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter '{directives}': {message}")]
    InvalidFilter {
        /// Directives that failed to parse.
        directives: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialised,
}

/// Configuration for the process-wide tracing subscriber.
///
/// # Examples
///
/// ```
/// use todddo::telemetry::TelemetryConfig;
///
/// let config = TelemetryConfig::default();
/// assert_eq!(config.filter, "info");
///
/// let verbose = TelemetryConfig::verbose();
/// assert_eq!(verbose.filter, "todddo=debug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives, for example `info` or `todddo=debug`.
    pub filter: String,
    /// Whether to colour output with ANSI escape codes.
    pub ansi: bool,
    /// Whether to include the event target (module path) in each line.
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            ansi: true,
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Creates a configuration that logs every todo operation.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            filter: "todddo=debug".to_owned(),
            ..Self::default()
        }
    }

    /// Creates a configuration whose filter comes from `RUST_LOG`, falling
    /// back to the default filter when the variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_filter_var(std::env::var(EnvFilter::DEFAULT_ENV).ok())
    }

    /// Builds a configuration from the raw value of the filter variable.
    fn from_filter_var(value: Option<String>) -> Self {
        let filter = value
            .filter(|directives| !directives.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Parses the configured filter directives.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFilter`] when the directives are
    /// malformed.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_new(&self.filter).map_err(|err| TelemetryError::InvalidFilter {
            directives: self.filter.clone(),
            message: err.to_string(),
        })
    }

    /// Installs a formatted subscriber as the global default.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFilter`] when the directives are
    /// malformed, or [`TelemetryError::AlreadyInitialised`] when a global
    /// subscriber has already been set.
    pub fn init(&self) -> Result<(), TelemetryError> {
        let filter = self.env_filter()?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(self.ansi)
            .with_target(self.with_target)
            .try_init()
            .map_err(|_| TelemetryError::AlreadyInitialised)
    }
}

//! errors.rs - Custom error types for the originality-core library.
//!
//! Scoring itself never fails: empty datasets, single documents and
//! zero-token documents resolve to defined metric values. The only failures
//! are invalid weight configurations and problems reading a weight file.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// An invalid weight configuration.
///
/// Raised when a `WeightConfig` is built, never while scoring.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("Unknown metric '{0}' (expected one of: entropy, diversity, perplexity)")]
    UnknownMetric(String),

    #[error("Weight for '{metric}' must be a finite non-negative number, got {value}")]
    InvalidWeight { metric: String, value: f64 },

    #[error("At least one metric weight must be greater than zero")]
    NoPositiveWeight,

    #[error("Invalid weight specification '{0}' (expected KEY=VALUE)")]
    MalformedOverride(String),
}

/// This enum represents all possible error types in the `originality-core` library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SignalError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to read weight file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse weight file '{path}': {message}")]
    Parse { path: String, message: String },
}

impl SignalError {
    /// True for every variant caused by an invalid weight configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, SignalError::Configuration(_))
    }
}

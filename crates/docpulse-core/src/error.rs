//! Error types for docpulse-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur at the analysis boundary.
///
/// Degenerate content (empty text, zero sentences, zero words) is not an
/// error: the engine handles those inputs with explicit zero-count policies
/// and always returns a well-formed report.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input is not valid UTF-8 text.
    #[error("input is not valid UTF-8 text")]
    InvalidInput(#[from] std::str::Utf8Error),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

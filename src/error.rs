//! Error types for the overnight pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur while configuring a biller.
//! Billing a session never fails.

use thiserror::Error;

/// The main error type for the overnight pay engine.
///
/// # Example
///
/// ```
/// use sitter_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/biller.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/biller.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configuration value was rejected (e.g. the `exact` rounding policy).
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// A description of why the value was rejected.
        message: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for promter.
//!
//! This module defines a unified error enum that covers every failure a
//! prompt call or the CLI can report: local validation failures, errors from
//! the underlying terminal widget, configuration and I/O problems.

use thiserror::Error;

/// A local input rule that rejected what the user typed.
///
/// The display text is shown to the user verbatim by the terminal widget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or whitespace-only where text is required
    #[error("please provide a text")]
    EmptyText,

    /// Input was neither empty nor an http(s) URL
    #[error("please enter a valid url")]
    InvalidUrl,
}

/// Unified error type for promter.
///
/// All fallible functions return `Result<T, AppError>`.
/// A prompt that exhausted its retries returns the last attempt's error;
/// there is no separate variant for it.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected by a validator
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failure reported by the underlying prompt widget (interrupted, no tty, ...)
    #[error("Input error: {0}")]
    Input(String),

    /// A selection prompt was issued with nothing to choose from
    #[error("No options to select from")]
    EmptySelection,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

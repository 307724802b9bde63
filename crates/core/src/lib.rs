//! Promter Core Library
//!
//! This crate provides the foundational utilities for the promter workspace:
//! - Error handling (`AppError`, `AppResult`, `ValidationError`)
//! - Logging infrastructure
//! - Configuration management and prompter options

pub mod config;
pub mod error;
pub mod logging;
pub mod options;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult, ValidationError};
pub use options::PrompterOptions;

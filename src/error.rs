//! Error types for the relata compiler

use relata_core::CoreError;
use thiserror::Error;

/// Compiler error types
#[derive(Error, Debug)]
pub enum RelataError {
    /// A hook or the dispatcher aborted the program
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration document could not be parsed
    #[error("Configuration error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// State could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used by the compiler surface
pub type RelataResult<T> = Result<T, RelataError>;

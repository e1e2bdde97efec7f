use std::io;

use thiserror::Error;

use super::input::InputError;

/// Library-wide error type for the action.
#[derive(Debug, Error)]
pub enum AppError {
    /// Action input failed validation.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// External tool could not be run or exited without a usable report.
    #[error("{tool} failed: {details}")]
    ExecutionFailure { tool: String, details: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Broken internal invariant.
    #[error("Internal error: {0}")]
    InternalError(String),
}


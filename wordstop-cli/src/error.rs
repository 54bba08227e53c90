//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Position outside the document
    PositionOutOfRange { pos: usize, len: usize },
    /// Configuration file problem
    ConfigError(String),
    /// Input could not be read
    InputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::PositionOutOfRange { pos, len } => {
                write!(f, "Position {pos} is outside the document (length {len})")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InputError(msg) => write!(f, "Input error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

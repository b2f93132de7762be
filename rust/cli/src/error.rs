//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! any error to exit code 2.

use std::fmt;

use pokeher_engine::errors::{BettingError, BlindError, CacheError, EvalError, SimulationError};

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EvalError> for CliError {
    fn from(error: EvalError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<SimulationError> for CliError {
    fn from(error: SimulationError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<BettingError> for CliError {
    fn from(error: BettingError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<BlindError> for CliError {
    fn from(error: BlindError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<CacheError> for CliError {
    fn from(error: CacheError) -> Self {
        CliError::Engine(error.to_string())
    }
}

//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.

use std::fmt;

use showdown_engine::errors::HandError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI
/// execution, allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
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

// Malformed hands and cards surface as invalid input
impl From<HandError> for CliError {
    fn from(error: HandError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_errors_become_invalid_input() {
        let err: CliError = HandError::WrongCardCount(4).into();
        match err {
            CliError::InvalidInput(msg) => assert!(msg.contains("five cards")),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let err: CliError = std::io::Error::other("boom").into();
        assert!(err.source().is_some());
    }
}

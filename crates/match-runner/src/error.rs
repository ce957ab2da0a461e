//! Error types for the match runner crate.
//!
//! This module defines the error hierarchy used throughout the match runner
//! application, providing structured error handling for different failure
//! modes.

use std::error::Error;
use std::fmt;

/// Error type for match runner operations.
///
/// Configuration errors are fatal and reported before any game state is
/// created; game errors indicate a move the core rejected.
#[derive(Debug)]
pub enum MatchRunnerError {
    /// Game logic or move validation error
    Game(String),
    /// Configuration validation error
    Config(String),
}

impl fmt::Display for MatchRunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRunnerError::Game(msg) => write!(f, "Game error: {msg}"),
            MatchRunnerError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl Error for MatchRunnerError {}

impl From<String> for MatchRunnerError {
    fn from(msg: String) -> Self {
        MatchRunnerError::Game(msg)
    }
}

/// Convenience type alias for Results with MatchRunnerError.
pub type Result<T> = std::result::Result<T, MatchRunnerError>;

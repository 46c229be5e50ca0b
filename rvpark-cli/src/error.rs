//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors and failed workflow outcomes and mapping each onto an
//! exit code.

use std::fmt;

use rvpark::{Error as LibError, ErrorKind};

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// A workflow or record operation returned an error outcome.
    Failed {
        /// The outcome's `"<context>: <reason>"` message.
        message: String,
        /// Classification of the failure.
        kind: ErrorKind,
    },

    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Input rejected by validation
    /// - 2: Referenced record not found
    /// - 3: Store constraint or booking conflict
    /// - 4: Database unavailable
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    /// - 8: Invalid arguments
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Failed { kind, .. } => kind_exit_code(*kind),
            CliError::Library(lib_err) => kind_exit_code(lib_err.kind()),
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
            CliError::InvalidArguments(_) => 8,
        }
    }
}

fn kind_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Validation => 1,
        ErrorKind::NotFound => 2,
        ErrorKind::Constraint => 3,
        ErrorKind::Connection => 4,
        ErrorKind::Internal => 6,
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Failed { message, .. } => write!(f, "{message}"),
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(io) => CliError::Io(io),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

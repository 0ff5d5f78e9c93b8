//! Error types for the hummingbird console.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::conf::EditError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for console operations.
///
/// Each variant maps to a CLI exit code and, for the HTTP API, a status code.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// User provided invalid arguments or input.
    #[error("{0}")]
    UserError(String),

    /// A directory or file the operation needs does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Persisting a file failed (disk full, permissions, ...).
    #[error("Write failed: {0}")]
    WriteError(String),

    /// The HTTP server could not be started or failed while running.
    #[error("Server error: {0}")]
    ServerError(String),
}

impl ConsoleError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConsoleError::UserError(_) => exit_codes::USER_ERROR,
            ConsoleError::NotFound(_) => exit_codes::NOT_FOUND,
            ConsoleError::WriteError(_) => exit_codes::WRITE_FAILURE,
            ConsoleError::ServerError(_) => exit_codes::SERVER_FAILURE,
        }
    }
}

impl From<EditError> for ConsoleError {
    fn from(err: EditError) -> Self {
        ConsoleError::UserError(err.to_string())
    }
}

/// Result type alias for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;

//! Application-level errors
//!
//! The domain never fails; everything here comes from reading user input,
//! command scripts, or configuration.

use thiserror::Error;

/// Application errors add input and configuration context around the infallible domain.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    #[error("script line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<ApplicationError>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    pub fn invalid_command(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

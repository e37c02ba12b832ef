//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::LocationError;

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider could not be reached or answered with a non-success status
    #[error("Network failure: {0}")]
    Network(String),

    /// The provider did not answer in time
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The provider answered with a body that could not be understood
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Device location could not be obtained
    #[error(transparent)]
    Location(#[from] LocationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout { .. })
    }

    /// Whether the error was caused by the caller's input
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_input_error(),
            _ => false,
        }
    }
}

//! Places error types

use thiserror::Error;

/// Errors that can occur during a nearby search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacesError {
    /// The request never produced an HTTP response, or the response was not 2xx
    #[error("Network failure: {0}")]
    Network(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The provider answered but reported a status other than `OK`
    #[error("Provider returned status {status}{}", detail_suffix(.message))]
    Provider {
        /// Status string from the response, e.g. `ZERO_RESULTS`
        status: String,
        /// Optional `error_message` from the response
        message: Option<String>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn detail_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl PlacesError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout { .. })
    }

    /// Returns true if the provider was reached and reported a non-`OK` status
    #[must_use]
    pub const fn is_provider_status(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }

    /// The provider status, if this is a provider error
    #[must_use]
    pub fn provider_status(&self) -> Option<&str> {
        match self {
            Self::Provider { status, .. } => Some(status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(PlacesError::Network("test".to_string()).is_retryable());
        assert!(PlacesError::Timeout { timeout_secs: 10 }.is_retryable());
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!PlacesError::MalformedResponse("test".to_string()).is_retryable());
        assert!(!PlacesError::Configuration("test".to_string()).is_retryable());
        assert!(
            !PlacesError::Provider {
                status: "ZERO_RESULTS".to_string(),
                message: None,
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_provider_status_is_distinguishable() {
        let provider = PlacesError::Provider {
            status: "REQUEST_DENIED".to_string(),
            message: None,
        };
        assert!(provider.is_provider_status());
        assert_eq!(provider.provider_status(), Some("REQUEST_DENIED"));

        let network = PlacesError::Network("connection refused".to_string());
        assert!(!network.is_provider_status());
        assert_eq!(network.provider_status(), None);
    }

    #[test]
    fn test_error_display() {
        let err = PlacesError::Provider {
            status: "ZERO_RESULTS".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "Provider returned status ZERO_RESULTS");

        let err = PlacesError::Provider {
            status: "REQUEST_DENIED".to_string(),
            message: Some("The provided API key is invalid.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Provider returned status REQUEST_DENIED: The provided API key is invalid."
        );

        let err = PlacesError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}

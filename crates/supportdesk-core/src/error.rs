//! Error types for the support dashboard

use thiserror::Error;

/// Main error type for the support dashboard
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// The backend could not be reached or the transfer failed
    #[error("Request to {url} failed: {message}")]
    Http {
        /// Requested URL
        url: String,
        /// Transport error message
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("Backend returned HTTP {status} for {url}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body did not match the expected payload
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL
        url: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

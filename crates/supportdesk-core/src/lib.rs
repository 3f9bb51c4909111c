//! Core types and utilities for the support dashboard
//!
//! Holds the pieces shared by every binary in the workspace: the layered
//! [`Config`], the crate [`Error`], and the read-only view-models that mirror
//! the backend's `/api/dashboard` and `/api/issues` payloads.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod types;

/// Error context handling for binaries and tests
pub mod context_error {
    use std::{error::Error as StdError, fmt};

    /// An error message optionally wrapping the error that caused it
    #[derive(Debug)]
    pub struct ContextError {
        source: Option<Box<dyn StdError + Send + Sync>>,
        message: String,
    }

    impl ContextError {
        /// Create a new context error from a message
        pub fn new<S: Into<String>>(message: S) -> Self {
            Self {
                source: None,
                message: message.into(),
            }
        }

        /// Wrap an existing error with a message
        pub fn with_context<E, S>(error: E, message: S) -> Self
        where
            E: StdError + Send + Sync + 'static,
            S: Into<String>,
        {
            Self {
                source: Some(Box::new(error)),
                message: message.into(),
            }
        }
    }

    impl fmt::Display for ContextError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match &self.source {
                Some(source) => write!(f, "{}: {source}", self.message),
                None => write!(f, "{}", self.message),
            }
        }
    }

    impl StdError for ContextError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn StdError + 'static))
        }
    }

    /// Result type alias for context errors
    pub type Result<T> = std::result::Result<T, ContextError>;

    /// Create a context error from a message or format string
    #[macro_export]
    macro_rules! context_error {
        ($msg:literal) => {
            $crate::context_error::ContextError::new($msg)
        };
        ($fmt:expr, $($arg:tt)*) => {
            $crate::context_error::ContextError::new(format!($fmt, $($arg)*))
        };
    }

    /// Extension trait for adding context to results
    pub trait ResultExt<T> {
        /// Add context to an error
        ///
        /// # Errors
        ///
        /// Returns the original error wrapped in a [`ContextError`].
        fn with_context<F, S>(self, f: F) -> Result<T>
        where
            F: FnOnce() -> S,
            S: Into<String>;
    }

    impl<T, E> ResultExt<T> for std::result::Result<T, E>
    where
        E: StdError + Send + Sync + 'static,
    {
        fn with_context<F, S>(self, f: F) -> Result<T>
        where
            F: FnOnce() -> S,
            S: Into<String>,
        {
            self.map_err(|e| ContextError::with_context(e, f()))
        }
    }

    impl From<std::io::Error> for ContextError {
        fn from(err: std::io::Error) -> Self {
            Self::with_context(err, "I/O operation failed")
        }
    }

    impl From<crate::Error> for ContextError {
        fn from(err: crate::Error) -> Self {
            Self::with_context(err, "Dashboard error")
        }
    }
}

// Re-export commonly used types
pub use config::{Config, LogFormat, LoggingConfig};
pub use error::{Error, Result};
pub use types::{DailyIssueCount, DashboardData, IssueRecord, OutstandingCounts, WeeklyStat};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if the configured level is not a valid filter directive
/// or a global subscriber is already installed.
pub fn init_logging(logging: &LoggingConfig) -> context_error::Result<()> {
    use context_error::ResultExt;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)
            .with_context(|| format!("Invalid log level '{}'", logging.level))?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match logging.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
    };

    installed.with_context(|| "Failed to install tracing subscriber")
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::context_error::{ContextError, ResultExt};
    use std::error::Error as StdError;

    #[test]
    fn test_context_error_display_includes_source() {
        let io = std::io::Error::other("disk on fire");
        let err = ContextError::with_context(io, "Failed to write page");

        assert_eq!(err.to_string(), "Failed to write page: disk on fire");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_context_error_macro() {
        let err = crate::context_error!("Bad address {}", "::1:99999");
        assert_eq!(err.to_string(), "Bad address ::1:99999");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_result_ext_wraps_error() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.with_context(|| "while exporting").unwrap_err();
        assert!(err.to_string().starts_with("while exporting"));
    }

    #[test]
    fn test_init_logging_rejects_invalid_level() {
        let logging = crate::LoggingConfig {
            level: "supportdesk=loudest".to_string(),
            format: crate::LogFormat::Json,
        };
        let in_child = crate::isolated::in_child_process("tests::test_init_logging_rejects_invalid_level", &[]);
        if !in_child {
            return;
        }

        let err = crate::init_logging(&logging).unwrap_err();
        assert!(err.to_string().starts_with("Invalid log level 'supportdesk=loudest'"));
    }

    #[test]
    fn test_init_logging_json_installs_once() {
        let logging = crate::LoggingConfig {
            level: "debug".to_string(),
            format: crate::LogFormat::Json,
        };
        let in_child = crate::isolated::in_child_process("tests::test_init_logging_json_installs_once", &[]);
        if !in_child {
            return;
        }

        crate::init_logging(&logging).unwrap();
        let err = crate::init_logging(&logging).unwrap_err();
        assert!(err.to_string().starts_with("Failed to install tracing subscriber"));
    }
}

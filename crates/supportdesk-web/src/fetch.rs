//! Outcome of a view's backend fetch

use supportdesk_core::Result;
use tracing::error;

/// State of a view's single backend fetch
///
/// Views branch on this instead of on whether their data container happens
/// to be empty, so an empty result and a failed request stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    /// The request has not completed
    #[default]
    Pending,
    /// The backend answered with a valid payload
    Loaded(T),
    /// The request failed; holds the error message
    Failed(String),
}

impl<T> FetchState<T> {
    /// Settle a fetch, logging the failure if there is one
    #[must_use]
    pub fn from_result(resource: &str, result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => {
                error!(resource, error = %e, "Failed to fetch from backend");
                Self::Failed(e.to_string())
            }
        }
    }

    /// Borrow the payload if the fetch succeeded
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Take the payload if the fetch succeeded
    #[must_use]
    pub fn into_loaded(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Whether the fetch failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

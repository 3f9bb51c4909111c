//! HTTP client for the issue-tracking backend API

use reqwest::Client;
use serde::de::DeserializeOwned;
use supportdesk_core::{DashboardData, Error, IssueRecord, Result};
use tracing::debug;

/// Path of the aggregate statistics endpoint
pub const DASHBOARD_PATH: &str = "/api/dashboard";

/// Path of the issue list endpoint
pub const ISSUES_PATH: &str = "/api/issues";

/// API client for making HTTP requests to the backend
///
/// Requests are plain GETs: no authentication, no query parameters, no body.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create an API client on top of an existing `reqwest` client
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the aggregate dashboard statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the backend answers with a
    /// non-success status, or the body is not a dashboard payload.
    pub async fn get_dashboard(&self) -> Result<DashboardData> {
        self.get_json(DASHBOARD_PATH).await
    }

    /// Get every tracked issue
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the backend answers with a
    /// non-success status, or the body is not an array of issues.
    pub async fn get_issues(&self) -> Result<Vec<IssueRecord>> {
        self.get_json(ISSUES_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "Fetching from backend");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| Error::Http {
            url: url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|source| Error::Decode { url, source })
    }
}

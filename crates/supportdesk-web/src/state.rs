//! Application state management

use crate::api_client::ApiClient;
use supportdesk_core::Config;

/// Application state holding configuration and clients
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::new(config.backend.base_url.clone());

        Self { config, api_client }
    }
}

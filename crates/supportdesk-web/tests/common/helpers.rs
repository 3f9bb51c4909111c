//! Test helper functions and utilities

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Once;
use supportdesk_core::{Config, context_error::Result, context_error::ResultExt};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Builder for test configurations
pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    /// Start from the defaults
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Point the backend client at a mock server
    pub fn with_backend(mut self, base_url: impl Into<String>) -> Self {
        self.config.backend.base_url = base_url.into();
        self
    }

    /// Serve static assets from a directory
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.assets.public_dir = Some(dir.into());
        self
    }

    /// Toggle the CORS layer
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.config.server.enable_cors = enabled;
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

/// Mount a JSON answer for `GET {route}`
pub async fn mock_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a bare status answer for `GET {route}`
pub async fn mock_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Base URL of a port nothing listens on
pub async fn unreachable_backend() -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{port}"))
}

/// Send a GET through the router, returning the status and body text
pub async fn get(app: Router, uri: &str) -> Result<(StatusCode, String)> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .with_context(|| format!("Failed to build request for {uri}"))?;

    let response = app
        .oneshot(request)
        .await
        .with_context(|| format!("Request to {uri} failed"))?;
    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .with_context(|| format!("Failed to read body of {uri}"))?
        .to_bytes();
    let body = String::from_utf8(bytes.to_vec()).with_context(|| "Body is not UTF-8")?;

    Ok((status, body))
}

/// Drop the comment markers Leptos leaves between text nodes
pub fn strip_markers(html: &str) -> String {
    html.replace("<!---->", "").replace("<!>", "")
}

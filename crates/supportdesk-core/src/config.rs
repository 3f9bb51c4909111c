//! Configuration management for the support dashboard

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "SUPPORTDESK";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Web server configuration
    pub server: ServerConfig,

    /// Backend API configuration
    pub backend: BackendConfig,

    /// Dashboard presentation settings
    pub dashboard: DashboardConfig,

    /// Static asset serving
    pub assets: AssetsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Answer cross-origin requests from any origin
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL the `/api/...` paths are appended to
    #[serde(default = "default_backend_url")]
    pub base_url: String,
}

/// Dashboard presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Title shown in the browser tab
    #[serde(default = "default_title")]
    pub title: String,

    /// Links of the "Open Pull Requests" panel
    #[serde(default = "default_pull_request_links")]
    pub pull_request_links: Vec<ExternalLink>,

    /// Script URL of the Chart.js bundle
    #[serde(default = "default_chart_js_url")]
    pub chart_js_url: String,
}

/// A labelled link to an external page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    /// Text shown under the link
    pub label: String,
    /// Target URL
    pub url: String,
}

/// Static asset serving
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory served for paths no route matches
    #[serde(default)]
    pub public_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_enable_cors() -> bool {
    true
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_title() -> String {
    "Support Dashboard".to_string()
}

fn default_pull_request_links() -> Vec<ExternalLink> {
    [
        ("Main repo", "https://github.com/shuttle-hq/shuttle/pulls"),
        ("Docs repo", "https://github.com/shuttle-hq/shuttle-docs/pulls"),
        ("Examples repo", "https://github.com/shuttle-hq/shuttle-examples/pulls"),
        ("Deploy action", "https://github.com/shuttle-hq/deploy-action/pulls"),
    ]
    .into_iter()
    .map(|(label, url)| ExternalLink {
        label: label.to_string(),
        url: url.to_string(),
    })
    .collect()
}

fn default_chart_js_url() -> String {
    "https://cdn.jsdelivr.net/npm/chart.js@4/dist/chart.umd.min.js".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            pull_request_links: default_pull_request_links(),
            chart_js_url: default_chart_js_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from `config.*` in the working directory and the
    /// environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required to exist) or the
    /// optional `config.*` file, then apply `SUPPORTDESK_*` environment
    /// overrides
    ///
    /// Nested keys use a double underscore, e.g. `SUPPORTDESK_BACKEND__BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Socket address the web server binds to
    ///
    /// # Errors
    ///
    /// Returns an error if `server.host` is not an IP address.
    pub fn socket_addr(&self) -> crate::Result<SocketAddr> {
        let host: IpAddr = self
            .server
            .host
            .parse()
            .map_err(|e| crate::Error::Configuration {
                message: format!("Invalid server host '{}': {e}", self.server.host),
            })?;

        Ok(SocketAddr::new(host, self.server.port))
    }
}

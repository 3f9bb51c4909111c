//! Route definitions for the web interface

use crate::{
    handlers::{api, pages},
    state::AppState,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build the complete web application router
#[must_use]
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::dashboard))
        .route("/issues", get(pages::issues_page))
        .route("/issues/", get(pages::issues_page))
        // API proxy routes
        .route("/api/dashboard", get(api::api_dashboard))
        .route("/api/issues", get(api::api_issues))
        // Health check
        .route("/health", get(api::health_check))
}

//! API proxy handlers for communicating with backend

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use supportdesk_core::{DashboardData, Error, IssueRecord};
use tracing::error;

/// Backend failure reported to API callers as `502 Bad Gateway`
#[derive(Debug)]
pub struct ApiError {
    context: &'static str,
    source: Error,
}

impl ApiError {
    fn new(context: &'static str, source: Error) -> Self {
        error!(error = %source, "{context}");
        Self { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.context,
            "message": self.source.to_string(),
        }));

        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

/// API endpoint for dashboard statistics - proxies to backend API
///
/// The payload is re-serialized from [`DashboardData`]: `null` optional
/// fields are omitted and tolerated gaps come out as their defaults.
pub async fn api_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardData>, ApiError> {
    state
        .api_client
        .get_dashboard()
        .await
        .map(Json)
        .map_err(|e| ApiError::new("Failed to fetch dashboard", e))
}

/// API endpoint for the issue list - proxies to backend API
///
/// The payload is re-serialized from [`IssueRecord`]: a missing `id` becomes
/// `0`, a `null` `originalPoster` becomes `""`, and `null` optional links or
/// users are omitted.
pub async fn api_issues(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IssueRecord>>, ApiError> {
    state
        .api_client
        .get_issues()
        .await
        .map(Json)
        .map_err(|e| ApiError::new("Failed to fetch issues", e))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

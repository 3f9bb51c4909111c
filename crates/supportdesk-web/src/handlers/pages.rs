//! Page handlers rendering HTML documents

use crate::{
    fetch::FetchState,
    render::{render_dashboard, render_issues, render_not_found},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::Html};
use std::sync::Arc;

/// Dashboard page
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let data = FetchState::from_result("dashboard", state.api_client.get_dashboard().await);

    Html(render_dashboard(data, &state.config.dashboard))
}

/// Issues page
pub async fn issues_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let issues = FetchState::from_result("issues", state.api_client.get_issues().await);

    Html(render_issues(issues, &state.config.dashboard))
}

/// Fallback for paths no route or asset matches
pub async fn not_found(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(&state.config.dashboard)),
    )
}

//! Web server setup and configuration

use crate::{handlers::pages, routes::build_routes, state::AppState};
use axum::{Router, handler::Handler};
use std::sync::Arc;
use supportdesk_core::Config;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

/// Build the complete web application with all routes and state
#[must_use]
pub fn build_app(config: Config) -> Router {
    let state = Arc::new(AppState::new(config));
    let routes = build_routes();

    let routes = match state.config.assets.public_dir.clone() {
        Some(dir) => {
            info!(public_dir = %dir.display(), "Serving static assets");
            let not_found = pages::not_found.with_state(Arc::clone(&state));
            routes.fallback_service(ServeDir::new(dir).not_found_service(not_found))
        }
        None => routes.fallback(pages::not_found),
    };

    let enable_cors = state.config.server.enable_cors;
    let app = routes.with_state(state).layer(TraceLayer::new_for_http());

    if enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

//! Support dashboard web interface
//!
//! Serves the dashboard and issue list pages. Every page request performs a
//! single fetch against the backend API, keeps the outcome in a
//! [`FetchState`], and renders the page server-side with Leptos.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod components;
pub mod export;
pub mod fetch;
pub mod handlers;
pub mod pages;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;
pub mod styles;

// Re-export the main functions
pub use api_client::ApiClient;
pub use fetch::FetchState;
pub use server::build_app;
pub use state::AppState;

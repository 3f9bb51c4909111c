//! Static snapshot of the site
//!
//! Fetches both backend resources once and writes the rendered documents so
//! that any static file server can host them: `index.html` for the dashboard
//! and `issues/index.html` for the issue list.

use crate::{
    fetch::FetchState,
    render::{render_dashboard, render_issues},
    state::AppState,
};
use std::path::{Path, PathBuf};
use supportdesk_core::Result;
use tracing::{info, warn};

/// Suffix of a page written but not yet moved into place
const STAGING_SUFFIX: &str = "partial";

/// Render every page into `out_dir`, returning the written files
///
/// Pages are first written next to their targets as `*.partial` files and
/// only renamed into place once every page is staged, so a failed export
/// leaves the previous snapshot untouched.
///
/// # Errors
///
/// Returns an error if either backend fetch fails or a file cannot be
/// written. Nothing is written when a fetch fails.
pub async fn export_site(state: &AppState, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let dashboard = state.api_client.get_dashboard().await?;
    let issues = state.api_client.get_issues().await?;

    let pages = [
        (
            out_dir.join("index.html"),
            render_dashboard(FetchState::Loaded(dashboard), &state.config.dashboard),
        ),
        (
            out_dir.join("issues").join("index.html"),
            render_issues(FetchState::Loaded(issues), &state.config.dashboard),
        ),
    ];

    let mut staged = Vec::with_capacity(pages.len());
    for (path, html) in pages {
        let staging = staging_path(&path);
        if let Err(e) = stage(&staging, &html).await {
            discard(&staged).await;
            return Err(e.into());
        }
        staged.push((staging, path));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (staging, path) in staged {
        tokio::fs::rename(&staging, &path).await?;
        info!(path = %path.display(), "Wrote page");
        written.push(path);
    }

    Ok(written)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(STAGING_SUFFIX);
    PathBuf::from(name)
}

async fn stage(staging: &Path, html: &str) -> std::io::Result<()> {
    if let Some(parent) = staging.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(staging, html).await
}

async fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (staging, _) in staged {
        if let Err(e) = tokio::fs::remove_file(staging).await {
            warn!(path = %staging.display(), error = %e, "Failed to remove staged page");
        }
    }
}

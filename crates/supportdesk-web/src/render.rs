//! Server-side rendering of complete HTML documents

use crate::components::PageShell;
use crate::fetch::FetchState;
use crate::pages::{DashboardPage, IssuesPage, NotFound};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use supportdesk_core::config::DashboardConfig;
use supportdesk_core::{DashboardData, IssueRecord};

/// Render the dashboard document
#[must_use]
pub fn render_dashboard(data: FetchState<DashboardData>, config: &DashboardConfig) -> String {
    let links = config.pull_request_links.clone();
    let html = view! {
        <PageShell title=config.title.clone() chart_js_url=Some(config.chart_js_url.clone())>
            <DashboardPage data=data links=links />
        </PageShell>
    }
    .to_html();

    with_doctype(&html)
}

/// Render the issues document
#[must_use]
pub fn render_issues(issues: FetchState<Vec<IssueRecord>>, config: &DashboardConfig) -> String {
    let html = view! {
        <PageShell title=format!("Issues | {}", config.title) chart_js_url=None>
            <IssuesPage issues=issues />
        </PageShell>
    }
    .to_html();

    with_doctype(&html)
}

/// Render the 404 document
#[must_use]
pub fn render_not_found(config: &DashboardConfig) -> String {
    let html = view! {
        <PageShell title=format!("Not Found | {}", config.title) chart_js_url=None>
            <NotFound />
        </PageShell>
    }
    .to_html();

    with_doctype(&html)
}

fn with_doctype(html: &str) -> String {
    format!("<!DOCTYPE html>\n{html}")
}

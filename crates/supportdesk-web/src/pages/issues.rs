//! Issues page: one table row per tracked issue

use crate::components::Loading;
use crate::fetch::FetchState;
use leptos::prelude::*;
use supportdesk_core::IssueRecord;

/// Shown when nobody answered the thread
pub const NO_RESPONSE: &str = "No response yet";

/// Shown when the issue is still open
pub const NOT_RESOLVED: &str = "Not resolved yet";

/// Shown when the issue has no GitHub counterpart
pub const NOT_ELEVATED: &str = "Not elevated";

/// Shown instead of the table when the backend could not be reached
pub const FETCH_FAILED: &str = "Data fetching failed :(";

/// Text of the outbound thread and GitHub links
const LINK_TEXT: &str = "Click";

/// Issues page component
#[component]
pub fn IssuesPage(
    /// Outcome of the `/api/issues` fetch
    issues: FetchState<Vec<IssueRecord>>,
) -> impl IntoView {
    let body = match issues {
        FetchState::Pending => view! { <Loading /> }.into_any(),
        FetchState::Failed(_) => view! { <p class="fetch-failed">{FETCH_FAILED}</p> }.into_any(),
        FetchState::Loaded(issues) => view! { <IssuesTable issues=issues /> }.into_any(),
    };

    view! {
        <div>
            <h1 class="page-title">"Issues"</h1>
            {body}
        </div>
    }
}

#[component]
fn IssuesTable(issues: Vec<IssueRecord>) -> impl IntoView {
    view! {
        <table class="issues-table">
            <thead>
                <tr>
                    <th>"Original Poster"</th>
                    <th>"Severity"</th>
                    <th>"First Responder"</th>
                    <th>"Resolved By"</th>
                    <th>"Discord Thread Link"</th>
                    <th>"Github Link"</th>
                    <th>"Created At"</th>
                </tr>
            </thead>
            <tbody>
                {issues
                    .into_iter()
                    .map(|issue| view! { <IssueRow issue=issue /> })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn IssueRow(issue: IssueRecord) -> impl IntoView {
    let github = match issue.github_link {
        Some(url) => view! { <ExternalAnchor url=url /> }.into_any(),
        None => NOT_ELEVATED.into_any(),
    };

    view! {
        <tr class="issue-row">
            <td>{issue.original_poster}</td>
            <td>{issue.severity}</td>
            <td>{issue.first_responder.unwrap_or_else(|| NO_RESPONSE.to_string())}</td>
            <td>{issue.resolved_by.unwrap_or_else(|| NOT_RESOLVED.to_string())}</td>
            <td>
                <ExternalAnchor url=issue.discord_thread_link />
            </td>
            <td>{github}</td>
            <td>{issue.creation_date}</td>
        </tr>
    }
}

#[component]
fn ExternalAnchor(url: String) -> impl IntoView {
    view! {
        <a href=url target="_blank" rel="noopener noreferrer">
            {LINK_TEXT}
        </a>
    }
}

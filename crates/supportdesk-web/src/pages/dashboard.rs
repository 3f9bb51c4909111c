//! Dashboard page: outstanding counters, weekly stats, issue volume chart
//! and the pull request links

use crate::components::IssueChart;
use crate::fetch::FetchState;
use leptos::prelude::*;
use supportdesk_core::config::ExternalLink;
use supportdesk_core::{DashboardData, OutstandingCounts, WeeklyStat};

/// Shown when a week has no resolved issue
pub const NO_SOLVER: &str = "No issues solved yet";

/// Shown when a week has no answered thread
pub const NO_FIRST_RESPONDER: &str = "No help threads responded to yet :(";

/// Main dashboard page component
///
/// Until the fetch succeeds every panel renders blank; a failed fetch has
/// already been logged and is not surfaced on the page.
#[component]
pub fn DashboardPage(
    /// Outcome of the `/api/dashboard` fetch
    data: FetchState<DashboardData>,
    /// Links of the pull request panel
    links: Vec<ExternalLink>,
) -> impl IntoView {
    let (counts, stats, series) = match data.into_loaded() {
        Some(data) => (
            Some(data.issues_awaiting_response),
            data.last_four_weeks_stats,
            Some(data.issues_opened_last_week),
        ),
        None => (None, Vec::new(), None),
    };

    view! {
        <OutstandingPanel counts=counts />
        <WeeklyStatsPanel stats=stats />
        <section class="panel">
            <h2 class="centered">"Issues Opened over last 7 Days"</h2>
            <IssueChart data=series />
        </section>
        <PullRequestPanel links=links />
    }
}

#[component]
fn OutstandingPanel(counts: Option<OutstandingCounts>) -> impl IntoView {
    let [unanswered, unresolved, unresolved_github] = counts
        .map(|counts| {
            [
                counts.unanswered_threads.to_string(),
                counts.unresolved_issues.to_string(),
                counts.unresolved_github_issues.to_string(),
            ]
        })
        .unwrap_or_default();

    view! {
        <section class="panel">
            <h2>"Currently Outstanding"</h2>
            <div class="counter-grid">
                <Counter value=unanswered label="Unanswered Issues" />
                <Counter value=unresolved label="Unresolved Issues" />
                <Counter value=unresolved_github label="Unresolved GitHub Issues" />
            </div>
        </section>
    }
}

#[component]
fn Counter(value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class="counter-card">
            <p class="counter">{value}</p>
            <p>{label}</p>
        </div>
    }
}

#[component]
fn WeeklyStatsPanel(stats: Vec<WeeklyStat>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2>"Stats - Last 4 Weeks"</h2>
            <table class="stats-table">
                <thead>
                    <tr>
                        <th>"Date Range"</th>
                        <th>"Total Issues"</th>
                        <th>"Total Elevated"</th>
                        <th>"Total Resolved"</th>
                        <th>"One-Touch Threads"</th>
                        <th>"Extended Threads"</th>
                        <th>"Average Response Time"</th>
                        <th>"Best Solver"</th>
                        <th>"Best First Responder"</th>
                    </tr>
                </thead>
                <tbody>
                    {stats
                        .into_iter()
                        .map(|week| view! { <WeeklyStatRow week=week /> })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn WeeklyStatRow(week: WeeklyStat) -> impl IntoView {
    view! {
        <tr class="stat-row">
            <td>{week.date_range}</td>
            <td>{week.total_issues}</td>
            <td>{week.total_elevated_issues}</td>
            <td>{week.total_resolved_issues}</td>
            <td>{week.total_one_touch_threads}</td>
            <td>{week.extended_threads}</td>
            <td>{week.average_response_time}</td>
            <td>{week.best_solver.unwrap_or_else(|| NO_SOLVER.to_string())}</td>
            <td>
                {week.best_first_responder.unwrap_or_else(|| NO_FIRST_RESPONDER.to_string())}
            </td>
        </tr>
    }
}

#[component]
fn PullRequestPanel(links: Vec<ExternalLink>) -> impl IntoView {
    view! {
        <section class="panel">
            <h2>"Open Pull Requests"</h2>
            <div class="counter-grid links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a
                                class="counter-card"
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <p>{link.label}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

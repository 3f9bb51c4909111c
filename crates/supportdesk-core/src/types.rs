//! View-models mirroring the backend API payloads
//!
//! Every type here is read-only: the dashboard decodes them from the backend
//! and renders them, nothing else. Keys are camelCase on the wire.

use serde::{Deserialize, Deserializer, Serialize};

/// A tracked support request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    /// Issue identifier (0 when the backend omits it)
    #[serde(default)]
    pub id: i64,
    /// Author of the help thread
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_poster: String,
    /// Severity category
    pub severity: i32,
    /// User that answered the thread first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_responder: Option<String>,
    /// User that resolved the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    /// Link to the Discord help thread
    pub discord_thread_link: String,
    /// Link to the GitHub issue, present once the issue is elevated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    /// Creation date as formatted by the backend
    pub creation_date: String,
}

impl IssueRecord {
    /// Whether the issue was promoted to the GitHub tracker
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        self.github_link.is_some()
    }
}

/// Payload of `GET /api/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// One entry per week, newest first
    pub last_four_weeks_stats: Vec<WeeklyStat>,
    /// Outstanding counters
    pub issues_awaiting_response: OutstandingCounts,
    /// Daily issue volume for the last seven days
    pub issues_opened_last_week: Vec<DailyIssueCount>,
}

/// Rolling statistics for one week
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStat {
    /// Human readable week span, unique per row
    pub date_range: String,
    /// Issues opened
    pub total_issues: i64,
    /// Issues elevated to GitHub
    pub total_elevated_issues: i64,
    /// Issues resolved
    pub total_resolved_issues: i64,
    /// Threads resolved with a single response
    #[serde(default)]
    pub total_one_touch_threads: i64,
    /// Threads that needed more than one round
    #[serde(default)]
    pub extended_threads: i64,
    /// Average time to first response
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_response_time: String,
    /// User with the most resolved issues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_solver: Option<String>,
    /// User with the most first responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_first_responder: Option<String>,
}

/// Counters of issues still waiting on staff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingCounts {
    /// Threads nobody answered yet
    pub unanswered_threads: i64,
    /// Issues not resolved yet
    pub unresolved_issues: i64,
    /// Elevated issues not resolved yet
    pub unresolved_github_issues: i64,
}

/// Number of issues opened on one day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyIssueCount {
    /// Day label
    pub day: String,
    /// Issues opened that day
    pub total_issues_per_day: i64,
}

/// Decode `null` the same way as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

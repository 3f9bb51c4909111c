//! Backend payloads used by the integration tests

use serde_json::{Value, json};

/// Sample `/api/dashboard` payloads
pub struct DashboardFixtures;

impl DashboardFixtures {
    /// Four weeks of statistics, newest first
    pub fn complete() -> Value {
        json!({
            "lastFourWeeksStats": [
                Self::week("2023-07-10 - 2023-07-16", Some("ferris"), Some("corro")),
                Self::week("2023-07-03 - 2023-07-09", Some("ferris"), None),
                Self::week("2023-06-26 - 2023-07-02", None, Some("corro")),
                Self::week("2023-06-19 - 2023-06-25", None, None)
            ],
            "issuesAwaitingResponse": {
                "unansweredThreads": 12,
                "unresolvedIssues": 34,
                "unresolvedGithubIssues": 5
            },
            "issuesOpenedLastWeek": [
                {"day": "2023-07-10", "totalIssuesPerDay": 4},
                {"day": "2023-07-11", "totalIssuesPerDay": 7},
                {"day": "2023-07-12", "totalIssuesPerDay": 2}
            ]
        })
    }

    /// A quiet month: no weeks, zero counters, no daily volume
    pub fn empty() -> Value {
        json!({
            "lastFourWeeksStats": [],
            "issuesAwaitingResponse": {
                "unansweredThreads": 0,
                "unresolvedIssues": 0,
                "unresolvedGithubIssues": 0
            },
            "issuesOpenedLastWeek": []
        })
    }

    fn week(date_range: &str, best_solver: Option<&str>, best_first_responder: Option<&str>) -> Value {
        json!({
            "dateRange": date_range,
            "totalIssues": 21,
            "totalElevatedIssues": 3,
            "totalResolvedIssues": 17,
            "totalOneTouchThreads": 9,
            "extendedThreads": 4,
            "averageResponseTime": "00:18:30",
            "bestSolver": best_solver,
            "bestFirstResponder": best_first_responder
        })
    }
}

/// Sample `/api/issues` payloads
pub struct IssueFixtures;

impl IssueFixtures {
    /// Issue with every optional field populated
    pub fn complete() -> Value {
        json!({
            "id": 7,
            "originalPoster": "deploy-troubles",
            "severity": 2,
            "firstResponder": "ferris",
            "resolvedBy": "corro",
            "discordThreadLink": "https://discord.com/channels/1/7",
            "githubLink": "https://github.com/shuttle-hq/shuttle/issues/7",
            "creationDate": "2023-07-14"
        })
    }

    /// Fresh issue nobody has touched
    pub fn untouched() -> Value {
        json!({
            "id": 8,
            "originalPoster": "new-user",
            "severity": 1,
            "firstResponder": null,
            "resolvedBy": null,
            "discordThreadLink": "https://discord.com/channels/1/8",
            "githubLink": null,
            "creationDate": "2023-07-15"
        })
    }
}

//! Benchmarks for server-side page rendering

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use supportdesk_core::{
    Config, DailyIssueCount, DashboardData, IssueRecord, OutstandingCounts, WeeklyStat,
};
use supportdesk_web::{
    FetchState,
    render::{render_dashboard, render_issues},
};

fn sample_dashboard() -> DashboardData {
    DashboardData {
        last_four_weeks_stats: (0..4)
            .map(|week| WeeklyStat {
                date_range: format!("week {week}"),
                total_issues: 20 + week,
                total_elevated_issues: 3,
                total_resolved_issues: 15,
                total_one_touch_threads: 8,
                extended_threads: 4,
                average_response_time: "00:18:30".to_string(),
                best_solver: (week % 2 == 0).then(|| "ferris".to_string()),
                best_first_responder: Some("corro".to_string()),
            })
            .collect(),
        issues_awaiting_response: OutstandingCounts {
            unanswered_threads: 12,
            unresolved_issues: 34,
            unresolved_github_issues: 5,
        },
        issues_opened_last_week: (1..=7)
            .map(|day| DailyIssueCount {
                day: format!("2023-07-{day:02}"),
                total_issues_per_day: day * 2,
            })
            .collect(),
    }
}

fn sample_issues(count: i64) -> Vec<IssueRecord> {
    (0..count)
        .map(|id| IssueRecord {
            id,
            original_poster: format!("user-{id}"),
            severity: i32::try_from(id % 4).unwrap_or_default(),
            first_responder: (id % 3 != 0).then(|| "ferris".to_string()),
            resolved_by: (id % 2 == 0).then(|| "corro".to_string()),
            discord_thread_link: format!("https://discord.com/channels/1/{id}"),
            github_link: (id % 5 == 0)
                .then(|| format!("https://github.com/shuttle-hq/shuttle/issues/{id}")),
            creation_date: "2023-07-14".to_string(),
        })
        .collect()
}

/// Benchmark rendering of the dashboard document
fn bench_dashboard(c: &mut Criterion) {
    let config = Config::default().dashboard;
    let data = sample_dashboard();

    c.bench_function("render_dashboard", |b| {
        b.iter(|| render_dashboard(black_box(FetchState::Loaded(data.clone())), &config));
    });
}

/// Benchmark rendering of the issues table at different sizes
fn bench_issues(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_issues");
    let config = Config::default().dashboard;

    for count in [10_i64, 100, 1000] {
        let issues = sample_issues(count);
        group.throughput(Throughput::Elements(count.unsigned_abs()));
        group.bench_with_input(BenchmarkId::from_parameter(count), &issues, |b, issues| {
            b.iter(|| render_issues(black_box(FetchState::Loaded(issues.clone())), &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dashboard, bench_issues);
criterion_main!(benches);

//! Line chart of issues opened per day
//!
//! The widget holds no state: it turns the series into a Chart.js
//! configuration and hands it to the browser through a `data-chart`
//! attribute, which the bootstrap script in the page shell picks up.

use leptos::prelude::*;
use serde::Serialize;
use supportdesk_core::DailyIssueCount;
use tracing::warn;

const LINE_COLOR: &str = "rgb(255, 99, 132)";
const FILL_COLOR: &str = "rgba(255, 99, 132, 0.5)";

/// Complete Chart.js configuration object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartConfig {
    /// Chart type
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Labels and datasets
    pub data: ChartData,
    /// Display options
    pub options: ChartOptions,
}

/// Labels and datasets of a chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    /// X-axis labels
    pub labels: Vec<String>,
    /// Plotted series
    pub datasets: Vec<ChartDataset>,
}

/// One plotted series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    /// Series name
    pub label: String,
    /// Y values, aligned with the chart labels
    pub data: Vec<i64>,
    /// Line color
    pub border_color: &'static str,
    /// Point fill color
    pub background_color: &'static str,
}

/// Display options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    /// Resize with the container
    pub responsive: bool,
    /// Plugin toggles
    pub plugins: ChartPlugins,
}

/// Legend and title toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPlugins {
    /// Legend visibility
    pub legend: Toggle,
    /// Title visibility
    pub title: Toggle,
}

/// A `{ "display": bool }` switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    /// Whether the element is drawn
    pub display: bool,
}

impl ChartConfig {
    /// Single-series line chart over the daily counts, in input order
    #[must_use]
    pub fn issues_per_day(series: Option<&[DailyIssueCount]>) -> Self {
        let series = series.unwrap_or_default();

        Self {
            kind: "line",
            data: ChartData {
                labels: series.iter().map(|point| point.day.clone()).collect(),
                datasets: vec![ChartDataset {
                    label: "Issues opened".to_string(),
                    data: series.iter().map(|point| point.total_issues_per_day).collect(),
                    border_color: LINE_COLOR,
                    background_color: FILL_COLOR,
                }],
            },
            options: ChartOptions {
                responsive: true,
                plugins: ChartPlugins {
                    legend: Toggle { display: false },
                    title: Toggle { display: false },
                },
            },
        }
    }

    /// Labels of the chart
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// Values of the first dataset
    #[must_use]
    pub fn series(&self) -> &[i64] {
        self.data
            .datasets
            .first()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or_default()
    }

    /// Serialize for the `data-chart` attribute
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to serialize chart configuration");
            String::from("{}")
        })
    }
}

/// Issues opened per day
#[component]
pub fn IssueChart(
    /// Daily counts, oldest to newest as delivered by the backend
    data: Option<Vec<DailyIssueCount>>,
) -> impl IntoView {
    let config = ChartConfig::issues_per_day(data.as_deref()).to_json();

    view! {
        <div class="chart-container">
            <canvas class="issue-chart" data-chart=config></canvas>
        </div>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn point(day: &str, count: i64) -> DailyIssueCount {
        DailyIssueCount {
            day: day.to_string(),
            total_issues_per_day: count,
        }
    }

    #[test]
    fn test_labels_and_series_follow_input_order() {
        let series = vec![point("Mon", 3), point("Tue", 5)];
        let config = ChartConfig::issues_per_day(Some(series.as_slice()));

        assert_eq!(config.labels(), ["Mon".to_string(), "Tue".to_string()]);
        assert_eq!(config.series(), [3, 5]);
        assert_eq!(config.data.datasets.len(), 1);
    }

    #[test]
    fn test_missing_series_yields_empty_chart() {
        let config = ChartConfig::issues_per_day(None);

        assert!(config.labels().is_empty());
        assert!(config.series().is_empty());
    }

    #[test]
    fn test_legend_and_title_hidden() {
        let config = ChartConfig::issues_per_day(Some(&[point("2023-07-09", 1)][..]));
        let json: serde_json::Value = serde_json::from_str(&config.to_json()).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["responsive"], true);
        assert_eq!(json["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(json["options"]["plugins"]["title"]["display"], false);
        assert_eq!(json["data"]["labels"][0], "2023-07-09");
        assert_eq!(json["data"]["datasets"][0]["data"][0], 1);
        assert_eq!(json["data"]["datasets"][0]["borderColor"], LINE_COLOR);
    }

    #[test]
    fn test_component_renders_canvas() {
        let html = view! { <IssueChart data=Some(vec![point("Mon", 3)]) /> }.to_html();

        assert!(html.contains("<canvas"));
        assert!(html.contains("data-chart="));
        assert!(html.contains("Mon"));
    }
}

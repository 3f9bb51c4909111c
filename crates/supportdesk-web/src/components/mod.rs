//! Reusable UI components

mod chart;
mod document;
mod loading;
mod navbar;

pub use chart::{ChartConfig, ChartData, ChartDataset, ChartOptions, ChartPlugins, IssueChart, Toggle};
pub use document::PageShell;
pub use loading::Loading;
pub use navbar::Navbar;

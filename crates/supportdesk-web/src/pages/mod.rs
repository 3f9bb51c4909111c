//! Page components for the web interface

pub mod dashboard;
pub mod issues;
pub mod not_found;

pub use dashboard::DashboardPage;
pub use issues::IssuesPage;
pub use not_found::NotFound;

/// Drop the comment markers Leptos leaves between text nodes so assertions
/// can match plain markup
#[cfg(test)]
pub(crate) fn strip_markers(html: &str) -> String {
    html.replace("<!---->", "").replace("<!>", "")
}

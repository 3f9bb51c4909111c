//! Root document component - the complete HTML page

use super::Navbar;
use crate::styles::{CHART_BOOTSTRAP_JS, DASHBOARD_CSS};
use leptos::prelude::*;

/// The complete HTML document around a page body
///
/// When `chart_js_url` is set, Chart.js and the chart bootstrap script are
/// loaded after the body so every chart canvas already exists.
#[component]
pub fn PageShell(
    /// Document title
    title: String,
    /// Chart.js bundle to load, if the page draws charts
    chart_js_url: Option<String>,
    /// Page body
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{DASHBOARD_CSS}</style>
            </head>
            <body>
                <Navbar />
                <main class="content">{children()}</main>
                {chart_js_url.map(|src| {
                    view! {
                        <script src=src></script>
                        <script>{CHART_BOOTSTRAP_JS}</script>
                    }
                })}
            </body>
        </html>
    }
}

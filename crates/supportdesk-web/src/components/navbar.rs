//! Top navigation bar

use leptos::prelude::*;

/// Navigation between the dashboard and the issue list
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <ul>
                <li>
                    <a href="/">"Monthly Stats"</a>
                </li>
                <li>
                    <a href="/issues">"Issues"</a>
                </li>
            </ul>
        </nav>
    }
}

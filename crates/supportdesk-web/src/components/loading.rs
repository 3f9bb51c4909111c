//! Loading component for views whose fetch has not completed

use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

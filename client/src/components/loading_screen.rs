//! Full-screen centered loading indicator.

use leptos::prelude::*;

pub const LOADING_LABEL: &str = "Loading...";

/// Shown while the auth context has not resolved yet.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__label">{LOADING_LABEL}</div>
        </div>
    }
}

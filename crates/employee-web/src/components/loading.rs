//! Loading component for displaying loading states

use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <div class="spinner"></div>
            <span class="sr-only">"Loading employees..."</span>
        </div>
    }
}

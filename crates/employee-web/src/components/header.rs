//! Top bar with the application title

use super::icons::{Glyph, Icon};
use leptos::prelude::*;

/// Application title shown in the header
pub const APP_TITLE: &str = "Employee Management System";

/// Application header
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <div class="brand">
                    <Icon glyph=Glyph::Building class="icon-lg icon-accent" />
                    <h1 class="logo">{APP_TITLE}</h1>
                </div>
                <div class="user-badge">
                    <Icon glyph=Glyph::User class="icon-muted" />
                    <span>"Welcome, Admin"</span>
                </div>
            </div>
        </header>
    }
}

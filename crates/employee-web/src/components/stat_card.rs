//! Summary metric card for the dashboard

use super::icons::{Glyph, Icon};
use employee_core::dashboard::{self, ChangeDirection};
use leptos::prelude::*;

/// Text colour class for a change caption
#[must_use]
pub const fn change_class(direction: ChangeDirection) -> &'static str {
    match direction {
        ChangeDirection::Increase => "change change-up",
        ChangeDirection::Decrease => "change change-down",
    }
}

/// Stat card component
#[component]
pub fn StatCard(
    /// Metric to display
    card: dashboard::StatCard,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-header">
                <h3 class="stat-title">{card.title}</h3>
                <Icon glyph=Glyph::from(card.icon) class="icon-muted" />
            </div>
            <div class="stat-value">{card.value}</div>
            <p class=change_class(card.direction)>{card.change_caption()}</p>
        </div>
    }
}

//! Sidebar navigation with active-route highlighting

use super::icons::{Glyph, Icon};
use employee_core::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// CSS classes for a navigation link given the current pathname
#[must_use]
pub fn link_class(route: AppRoute, pathname: &str) -> &'static str {
    if route.is_active(pathname) {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Sidebar listing every top-level page
#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav">
            <ul class="nav-list">
                {AppRoute::all()
                    .into_iter()
                    .map(|route| {
                        let is_current = move || route.is_active(&pathname.get());
                        view! {
                            <li>
                                <a
                                    href=route.path()
                                    class=move || pathname.with(|p| link_class(route, p))
                                    aria-current=move || is_current().then_some("page")
                                >
                                    <Icon glyph=Glyph::from(route) />
                                    <span>{route.label()}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

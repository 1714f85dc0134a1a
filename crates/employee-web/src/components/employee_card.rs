//! Card summarising one employee record

use super::icons::{Glyph, Icon};
use employee_core::{Employee, EmployeeStatus};
use leptos::prelude::*;

/// Badge classes for a status; active records get the filled style
#[must_use]
pub const fn status_badge_class(status: EmployeeStatus) -> &'static str {
    if status.is_active() {
        "badge badge-primary"
    } else {
        "badge badge-secondary"
    }
}

/// Employee card component
#[component]
pub fn EmployeeCard(
    /// Record to display
    employee: Employee,
) -> impl IntoView {
    let joined = employee.joined_label();
    let badge = status_badge_class(employee.status);

    view! {
        <article class="card employee-card">
            <header class="card-header">
                <div class="card-title-row">
                    <h3 class="card-title">{employee.name}</h3>
                    <span class=badge>{employee.status.as_str()}</span>
                </div>
                <p class="position">{employee.position}</p>
                <p class="department">{employee.department}</p>
            </header>
            <div class="card-content">
                <div class="detail">
                    <Icon glyph=Glyph::Mail />
                    <span>{employee.email}</span>
                </div>
                <div class="detail">
                    <Icon glyph=Glyph::Phone />
                    <span>{employee.phone}</span>
                </div>
                <div class="detail">
                    <Icon glyph=Glyph::MapPin />
                    <span>{employee.location}</span>
                </div>
                <div class="detail">
                    <Icon glyph=Glyph::Calendar />
                    <span>{joined}</span>
                </div>
            </div>
        </article>
    }
}

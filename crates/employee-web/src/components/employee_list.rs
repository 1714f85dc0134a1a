//! Searchable, filterable grid of employee cards
//!
//! The list starts with a spinner, loads its records once after the source's
//! delay and then recomputes the visible cards whenever the search text or
//! the department selection changes.

use super::{
    employee_card::EmployeeCard,
    icons::{Glyph, Icon},
    loading::Loading,
    toast::ToastQueue,
};
use employee_core::{
    DepartmentFilter, Employee, EmployeeQuery, EmployeeSource, LoadNotice, LoadState, departments,
    filter::{ALL_DEPARTMENTS, EMPTY_RESULT_MESSAGE},
    filter_employees,
};
use leptos::prelude::*;
use tracing::{debug, info};

/// Employee list component
#[component]
pub fn EmployeeList(
    /// Where the records come from; defaults to the fixed dataset
    #[prop(optional)]
    source: EmployeeSource,
) -> impl IntoView {
    let (state, set_state) = signal(LoadState::<Vec<Employee>>::Loading);
    let (search, set_search) = signal(String::new());
    let (department, set_department) = signal(DepartmentFilter::All);
    let toasts = use_context::<ToastQueue>();

    let delay = source.delay();
    set_timeout(
        move || {
            let employees = source.fetch();
            let count = employees.len();
            // The list may have been unmounted before the timer fired.
            if set_state.try_update(|state| state.complete(employees)) == Some(true) {
                info!(count, "Employees loaded");
                if let Some(toasts) = toasts {
                    toasts.show(LoadNotice::employees_loaded(count));
                }
            }
        },
        delay,
    );

    let department_options = Memo::new(move |_| {
        state.with(|state| state.loaded().map(|e| departments(e)).unwrap_or_default())
    });
    let query = Memo::new(move |_| EmployeeQuery::new(search.get(), department.get()));
    let visible = Memo::new(move |_| {
        state.with(|state| {
            state
                .loaded()
                .map(|employees| query.with(|query| filter_employees(employees, query)))
                .unwrap_or_default()
        })
    });

    view! {
        <Show when=move || !state.with(LoadState::is_loading) fallback=Loading>
            <div class="employee-list">
                <div class="toolbar">
                    <div class="filters">
                        <label class="search">
                            <Icon glyph=Glyph::Search class="search-icon" />
                            <input
                                type="search"
                                class="input"
                                placeholder="Search employees..."
                                prop:value=search
                                on:input=move |ev| set_search.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="select-wrap">
                            <Icon glyph=Glyph::Filter />
                            <select
                                class="select"
                                aria-label="Filter by department"
                                prop:value=move || department.with(|d| d.select_value().to_string())
                                on:change=move |ev| {
                                    let selected = DepartmentFilter::from_select_value(
                                        &event_target_value(&ev),
                                    );
                                    debug!(department = %selected, "Department filter changed");
                                    set_department.set(selected);
                                }
                            >
                                <option value=ALL_DEPARTMENTS>"All Departments"</option>
                                <For
                                    each=move || department_options.get()
                                    key=Clone::clone
                                    children=move |name| {
                                        let label = name.clone();
                                        view! { <option value=name>{label}</option> }
                                    }
                                />
                            </select>
                        </label>
                    </div>
                    <button type="button" class="btn btn-primary">
                        <Icon glyph=Glyph::Plus />
                        "Add Employee"
                    </button>
                </div>

                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">{EMPTY_RESULT_MESSAGE}</p> }
                >
                    <div class="card-grid">
                        <For
                            each=move || visible.get()
                            key=|employee| employee.id
                            children=|employee| view! { <EmployeeCard employee /> }
                        />
                    </div>
                </Show>
            </div>
        </Show>
    }
}

//! Analytics page with static charts

use crate::components::charts::{BarChart, LineChart, PieChart};
use employee_core::analytics::{Datum, department_headcounts, employment_types, growth_trend};
use leptos::prelude::*;

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let headcounts: Vec<Datum> = department_headcounts().iter().map(Datum::from).collect();
    let growth: Vec<Datum> = growth_trend().iter().map(Datum::from).collect();

    view! {
        <div class="page analytics">
            <div class="page-header">
                <h2>"Analytics"</h2>
                <p>"Employee data insights and trends"</p>
            </div>
            <div class="two-column">
                <section class="card">
                    <h3 class="card-title">"Department Distribution"</h3>
                    <BarChart data=headcounts label="Employees per department" />
                </section>
                <section class="card">
                    <h3 class="card-title">"Employment Type"</h3>
                    <PieChart data=employment_types() label="Employees by employment type" />
                </section>
                <section class="card span-2">
                    <h3 class="card-title">"Employee Growth Trend"</h3>
                    <LineChart data=growth label="Headcount by month" />
                </section>
            </div>
        </div>
    }
}

//! Dashboard page showing summary metrics

use crate::components::stat_card::StatCard;
use employee_core::dashboard::{department_shares, recent_activities, stat_cards};
use leptos::prelude::*;

/// Main dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="page dashboard">
            <div class="page-header">
                <h2>"Dashboard"</h2>
                <p>"Overview of employee statistics and metrics"</p>
            </div>

            <div class="stat-grid">
                {stat_cards().iter().map(|card| view! { <StatCard card=*card /> }).collect_view()}
            </div>

            <div class="two-column">
                <section class="card">
                    <h3 class="card-title">"Recent Activities"</h3>
                    <ul class="activity-list">
                        {recent_activities()
                            .iter()
                            .map(|activity| {
                                view! {
                                    <li class="activity">
                                        <span class=format!("dot {}", activity.tone.class())></span>
                                        <div class="activity-text">
                                            <p class="activity-title">{activity.title}</p>
                                            <p class="activity-detail">{activity.detail}</p>
                                        </div>
                                        <span class="activity-when">{activity.when}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="card">
                    <h3 class="card-title">"Department Distribution"</h3>
                    <div class="share-list">
                        {department_shares()
                            .iter()
                            .map(|share| {
                                view! {
                                    <div class="share">
                                        <div class="share-row">
                                            <span class="share-name">{share.department}</span>
                                            <span class="share-percent">{format!("{}%", share.percent)}</span>
                                        </div>
                                        <div class="progress">
                                            <div
                                                class=format!("progress-fill {}", share.tone.class())
                                                style=share.bar_style()
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}

//! Main Leptos application component with routing

use crate::components::{header::Header, navigation::Navigation, toast::{ToastQueue, Toaster}};
use crate::pages::{
    analytics::Analytics, dashboard::Dashboard, employees::Employees, not_found::NotFound,
    settings::Settings,
};
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastQueue::new());

    view! {
        <Router>
            <div class="app">
                <Header />
                <div class="layout">
                    <Navigation />
                    <main class="content">
                        <Routes fallback=NotFound>
                            <Route path=path!("/") view=Dashboard />
                            <Route path=path!("/employees") view=Employees />
                            <Route path=path!("/analytics") view=Analytics />
                            <Route path=path!("/settings") view=Settings />
                        </Routes>
                    </main>
                </div>
                <Toaster />
            </div>
        </Router>
    }
}

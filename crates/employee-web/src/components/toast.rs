//! Transient notifications
//!
//! [`App`](crate::App) provides one [`ToastQueue`] as context; any component
//! can push a notice into it and the [`Toaster`] renders the latest one until
//! it times out or is dismissed.

use employee_core::LoadNotice;
use leptos::prelude::*;
use std::time::Duration;
use tracing::debug;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// A notice with the id used to dismiss it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id within the queue
    pub id: u64,
    /// Heading and body
    pub notice: LoadNotice,
}

/// Handle to the single visible toast
#[derive(Debug, Clone, Copy)]
pub struct ToastQueue {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    /// Empty queue
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    /// Replace the visible toast and schedule its dismissal
    pub fn show(self, notice: LoadNotice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        debug!(id, title = %notice.title, "Showing toast");
        self.current.set(Some(Toast { id, notice }));
        set_timeout(move || self.dismiss(id), TOAST_DURATION);
    }

    /// Hide toast `id` if it is still the visible one
    pub fn dismiss(self, id: u64) {
        self.current.update(|current| {
            if current.as_ref().is_some_and(|toast| toast.id == id) {
                *current = None;
            }
        });
    }

    /// Visible toast, tracked
    #[must_use]
    pub fn current(self) -> Option<Toast> {
        self.current.get()
    }
}

/// Bottom-right viewport for the visible toast
#[component]
pub fn Toaster() -> impl IntoView {
    let queue = use_context::<ToastQueue>().unwrap_or_default();

    view! {
        <div class="toaster" aria-live="polite">
            {move || {
                queue
                    .current()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="toast" role="status">
                                <div class="toast-body">
                                    <p class="toast-title">{toast.notice.title}</p>
                                    <p class="toast-description">{toast.notice.description}</p>
                                </div>
                                <button
                                    class="toast-close"
                                    aria-label="Dismiss"
                                    on:click=move |_| queue.dismiss(id)
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

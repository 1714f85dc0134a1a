//! Settings page
//!
//! All state is local to the page. Nothing is saved or sent anywhere; the
//! action buttons only validate and log.

use employee_core::{SettingToggle, SettingsForm};
use leptos::prelude::*;
use tracing::{debug, warn};

/// Parse the timeout field, keeping `current` when the text is not a number
#[must_use]
pub fn parse_timeout(text: &str, current: u32) -> u32 {
    text.trim().parse().unwrap_or(current)
}

/// Labelled on/off switch bound to one form toggle
#[component]
fn ToggleRow(form: RwSignal<SettingsForm>, toggle: SettingToggle) -> impl IntoView {
    view! {
        <div class="toggle-row">
            <label for=toggle.element_id()>{toggle.label()}</label>
            <input
                id=toggle.element_id()
                type="checkbox"
                role="switch"
                class="switch"
                prop:checked=move || form.with(|f| f.is_enabled(toggle))
                on:change=move |_| {
                    form.update(|f| {
                        let enabled = f.toggle(toggle);
                        debug!(?toggle, enabled, "Setting toggled");
                    });
                }
            />
        </div>
    }
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let form = RwSignal::new(SettingsForm::default());
    let (problem, set_problem) = signal(None::<String>);

    let check = move |action: &'static str| match form.with(SettingsForm::check) {
        Ok(()) => {
            debug!(action, "Settings are valid; nothing to submit");
            set_problem.set(None);
        }
        Err(e) => {
            warn!(action, error = %e, "Settings failed validation");
            set_problem.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="page settings">
            <div class="page-header">
                <h2>"Settings"</h2>
                <p>"Manage application settings and preferences"</p>
            </div>

            <Show when=move || problem.with(Option::is_some)>
                <p class="form-error" role="alert">{move || problem.get()}</p>
            </Show>

            <div class="two-column">
                <section class="card">
                    <h3 class="card-title">"General Settings"</h3>
                    <div class="field">
                        <label for="company-name">"Company Name"</label>
                        <input
                            id="company-name"
                            class="input"
                            prop:value=move || form.with(|f| f.general.company_name.clone())
                            on:input=move |ev| {
                                form.update(|f| f.general.company_name = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="field">
                        <label for="admin-email">"Admin Email"</label>
                        <input
                            id="admin-email"
                            type="email"
                            class="input"
                            prop:value=move || form.with(|f| f.general.admin_email.clone())
                            on:input=move |ev| {
                                form.update(|f| f.general.admin_email = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="field">
                        <label for="timezone">"Timezone"</label>
                        <input
                            id="timezone"
                            class="input"
                            prop:value=move || form.with(|f| f.general.timezone.clone())
                            on:input=move |ev| {
                                form.update(|f| f.general.timezone = event_target_value(&ev));
                            }
                        />
                    </div>
                    <button type="button" class="btn btn-primary" on:click=move |_| check("save")>
                        "Save Changes"
                    </button>
                </section>

                <section class="card">
                    <h3 class="card-title">"Notification Settings"</h3>
                    {SettingToggle::NOTIFICATIONS
                        .into_iter()
                        .map(|toggle| view! { <ToggleRow form toggle /> })
                        .collect_view()}
                </section>

                <section class="card">
                    <h3 class="card-title">"API Configuration"</h3>
                    <div class="field">
                        <label for="api-endpoint">"API Endpoint"</label>
                        <input
                            id="api-endpoint"
                            class="input"
                            prop:value=move || form.with(|f| f.api.endpoint.clone())
                            on:input=move |ev| {
                                form.update(|f| f.api.endpoint = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="field">
                        <label for="api-key">"API Key"</label>
                        <input
                            id="api-key"
                            type="password"
                            class="input"
                            readonly=true
                            prop:value=move || form.with(|f| f.api.api_key_mask.clone())
                        />
                    </div>
                    <div class="field">
                        <label for="timeout">"Request Timeout (seconds)"</label>
                        <input
                            id="timeout"
                            type="number"
                            class="input"
                            prop:value=move || form.with(|f| f.api.timeout_seconds.to_string())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                form.update(|f| {
                                    f.api.timeout_seconds = parse_timeout(&text, f.api.timeout_seconds);
                                });
                            }
                        />
                    </div>
                    <button type="button" class="btn btn-outline" on:click=move |_| check("test_connection")>
                        "Test Connection"
                    </button>
                </section>

                <section class="card">
                    <h3 class="card-title">"Security Settings"</h3>
                    {SettingToggle::SECURITY
                        .into_iter()
                        .map(|toggle| view! { <ToggleRow form toggle /> })
                        .collect_view()}
                    <div class="field">
                        <label for="password-policy">"Password Policy"</label>
                        <input
                            id="password-policy"
                            class="input"
                            prop:value=move || form.with(|f| f.security.password_policy.clone())
                            on:input=move |ev| {
                                form.update(|f| f.security.password_policy = event_target_value(&ev));
                            }
                        />
                    </div>
                    <button
                        type="button"
                        class="btn btn-destructive"
                        on:click=move |_| {
                            form.update(SettingsForm::reset);
                            set_problem.set(None);
                            debug!("Settings reset to defaults");
                        }
                    >
                        "Reset All Settings"
                    </button>
                </section>
            </div>
        </div>
    }
}

//! Sign-up form component
//!
//! Renders the registration fields, rederives validation after every edit,
//! and drives the submission flow. All state lives in component-local
//! signals and is discarded when the panel closes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_user_context;
use crate::core::{
    FormField, HttpRegistrationApi, RegistrationForm, SignUpService, StatusSink, StrengthBand,
    SubmissionState, SubmitOutcome, ValidationState,
};
use crate::ui::snackbar::use_snackbar;

impl StatusSink for RwSignal<SubmissionState> {
    fn set_submission(&self, state: SubmissionState) {
        self.set(state);
    }
}

fn band_class(band: StrengthBand) -> &'static str {
    match band {
        StrengthBand::VeryWeak => "strength-very-weak",
        StrengthBand::Weak => "strength-weak",
        StrengthBand::Fair => "strength-fair",
        StrengthBand::Strong => "strength-strong",
        StrengthBand::Strongest => "strength-strongest",
    }
}

/// Sign-up form component
#[component]
pub fn SignUpForm(
    /// Callback to close the hosting panel (runs after a successful sign-up)
    #[prop(optional, into)]
    on_close: Option<Callback<()>>,
    /// Callback to switch to the sign-in form
    #[prop(optional, into)]
    on_sign_in_click: Option<Callback<()>>,
    /// Whether to show as a modal or inline form
    #[prop(default = false)]
    modal: bool,
) -> impl IntoView {
    let session = use_user_context();
    let snackbar = use_snackbar();

    // Form state
    let form = RwSignal::new(RegistrationForm::new());
    let validation = RwSignal::new(ValidationState::new());
    let submission = RwSignal::new(SubmissionState::idle());
    let show_password = RwSignal::new(false);

    // Every keystroke lands here: store the raw value, rederive validation.
    let apply_edit = move |field: FormField, value: String| {
        form.update(|f| f.set_field(field, value));
        let next = form.with_untracked(|f| validation.with_untracked(|v| v.after_edit(f, field)));
        validation.set(next);
    };

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // The disabled control is the single-flight gate.
        if submission.get_untracked().controls_disabled {
            return;
        }

        spawn_local(async move {
            let service = SignUpService::new(
                HttpRegistrationApi::from_page_origin(),
                session,
                snackbar,
                submission,
            );

            let form_snapshot = form.get_untracked();
            let validation_snapshot = validation.get_untracked();

            match service.submit(&form_snapshot, &validation_snapshot).await {
                SubmitOutcome::Completed => {
                    if let Some(callback) = on_close {
                        callback.run(());
                    }
                }
                SubmitOutcome::EmailTaken(message) => {
                    validation.update(|v| v.server_email_error = Some(message));
                }
                // Gate refusals and failures already announced themselves.
                _ => {}
            }
        });
    };

    let form_content = view! {
        <form on:submit=on_submit class="auth-form">
            // Header
            <div class="auth-form-header">
                <h2>"Create your account"</h2>
                <p>"Join Vestra to shop new arrivals and track your orders"</p>
            </div>

            // Name fields
            <div class="field-row">
                <div class="field">
                    <label for="first-name">"First Name"</label>
                    <input
                        type="text"
                        id="first-name"
                        name="first-name"
                        autocomplete="given-name"
                        placeholder="Jane"
                        class="field-input"
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| apply_edit(FormField::FirstName, event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="last-name">"Last Name"</label>
                    <input
                        type="text"
                        id="last-name"
                        name="last-name"
                        autocomplete="family-name"
                        placeholder="Doe"
                        class="field-input"
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| apply_edit(FormField::LastName, event_target_value(&ev))
                    />
                </div>
            </div>

            // Email field
            <div class="field">
                <label for="email">"Email Address"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="jane.doe@example.com"
                    class="field-input"
                    class:invalid=move || {
                        validation.with(|v| {
                            v.email_format_error.is_some() || v.server_email_error.is_some()
                        })
                    }
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| apply_edit(FormField::Email, event_target_value(&ev))
                />
                {move || {
                    let snapshot = validation.get();
                    snapshot
                        .email_format_error
                        .map(|error| error.to_string())
                        .or(snapshot.server_email_error)
                        .map(|error| view! { <p class="field-error">{error}</p> })
                }}
            </div>

            // Password field
            <div class="field">
                <label for="password">"Password"</label>
                <div class="password-wrap">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="new-password"
                        placeholder="At least 6 characters"
                        class="field-input"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| apply_edit(FormField::Password, event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="toggle-visibility"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                // Strength meter, rederived on every keystroke
                {move || {
                    let score = validation.with(|v| v.password_strength);
                    let band = StrengthBand::from_score(score);
                    view! {
                        <div class="strength-meter">
                            <div class="strength-track">
                                <div
                                    class=format!("strength-fill {}", band_class(band))
                                    style=format!("width: {}%", score)
                                ></div>
                            </div>
                            <p class=format!("strength-label {}", band_class(band))>
                                {format!("Strength: {}", band)}
                            </p>
                        </div>
                    }
                }}
            </div>

            // Confirm password field
            <div class="field">
                <label for="confirm-password">"Confirm Password"</label>
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    id="confirm-password"
                    name="confirm-password"
                    autocomplete="new-password"
                    placeholder="Repeat your password"
                    class="field-input"
                    class:invalid=move || validation.with(|v| v.password_mismatch_error.is_some())
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| {
                        apply_edit(FormField::ConfirmPassword, event_target_value(&ev))
                    }
                />
                {move || {
                    validation.with(|v| v.password_mismatch_error).map(|error| {
                        view! { <p class="field-error">{error.to_string()}</p> }
                    })
                }}
            </div>

            // Submit button
            <button
                type="submit"
                class="submit-button"
                disabled=move || submission.get().controls_disabled
            >
                {move || {
                    if submission.get().in_progress {
                        "Creating account..."
                    } else {
                        "Create Account"
                    }
                }}
            </button>

            // Sign-in link
            <div class="auth-switch">
                "Already have an account? "
                <button
                    type="button"
                    class="link-button"
                    on:click=move |_| {
                        if let Some(callback) = on_sign_in_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign in"
                </button>
            </div>
        </form>
    };

    if modal {
        view! {
            <div class="modal-overlay">
                // Backdrop
                <div
                    class="modal-backdrop"
                    on:click=move |_| {
                        if let Some(callback) = on_close.as_ref() {
                            callback.run(());
                        }
                    }
                ></div>

                // Modal content
                <div class="modal-card">
                    <button
                        type="button"
                        class="modal-close"
                        on:click=move |_| {
                            if let Some(callback) = on_close.as_ref() {
                                callback.run(());
                            }
                        }
                    >
                        "✕"
                    </button>

                    {form_content}
                </div>
            </div>
        }
        .into_any()
    } else {
        view! { <div class="auth-card">{form_content}</div> }.into_any()
    }
}

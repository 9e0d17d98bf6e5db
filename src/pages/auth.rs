//! Sign-in / registration screen with tabbed forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only unauthenticated route. On success the session signal is
//! replaced with the authenticated state and the browser moves to the
//! dashboard; server rejection messages are surfaced verbatim.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::toast_host::show_error;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

const MIN_PASSWORD_LEN: usize = 8;

pub(crate) fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn validate_register_input(
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(String, String, String), &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name.");
    }
    let (email, password) = validate_login_input(email, password)?;
    Ok((email, password, full_name.to_owned()))
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let is_login = RwSignal::new(true);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        if is_login.get() {
            let (email_value, password_value) =
                match validate_login_input(&email.get(), &password.get()) {
                    Ok(values) => values,
                    Err(message) => {
                        show_error(toasts, message);
                        return;
                    }
                };
            busy.set(true);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let backend = crate::state::session::HttpBackend;
                match crate::state::session::login(&backend, &email_value, &password_value).await {
                    Ok(next) => {
                        session.set(next);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(e) => {
                        show_error(toasts, e.user_message());
                        busy.set(false);
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email_value, password_value, session);
            }
        } else {
            let (email_value, password_value, name_value) = match validate_register_input(
                &email.get(),
                &password.get(),
                &full_name.get(),
            ) {
                Ok(values) => values,
                Err(message) => {
                    show_error(toasts, message);
                    return;
                }
            };
            busy.set(true);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let backend = crate::state::session::HttpBackend;
                match crate::state::session::register(
                    &backend,
                    &email_value,
                    &password_value,
                    &name_value,
                )
                .await
                {
                    Ok(next) => {
                        session.set(next);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(e) => {
                        show_error(toasts, e.user_message());
                        busy.set(false);
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email_value, password_value, name_value, session);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__brand">
                    <span class="auth-card__logo">"A"</span>
                    <h1>"AutoShorts"</h1>
                    <p class="auth-card__subtitle">"Automated faceless short-video generation"</p>
                </div>

                <div class="auth-card__tabs">
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || is_login.get()
                        on:click=move |_| is_login.set(true)
                    >
                        "Sign in"
                    </button>
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || !is_login.get()
                        on:click=move |_| is_login.set(false)
                    >
                        "Register"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !is_login.get()>
                        <label class="auth-form__label">
                            "Full name"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Maria Nowak"
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Min. 8 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Working..."
                            } else if is_login.get() {
                                "Sign in"
                            } else {
                                "Create account"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

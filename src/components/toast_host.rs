//! Toast rendering and auto-expiry.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the `ToastState` context; mutation handlers call the
//! `show_*` helpers and the host renders whatever is queued. Expiry timers
//! only run in the browser build.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_TTL_SECS: u64 = 4;

/// Queue a toast and schedule its dismissal.
pub fn show(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_TTL_SECS)).await;
            toasts.update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn show_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Success, message);
}

pub fn show_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Error, message);
}

pub fn show_info(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Info, message);
}

/// Fixed-position stack of queued toasts; click dismisses early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("toast {}", toast.kind.css_class())
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

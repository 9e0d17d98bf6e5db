//! Account settings: profile edits, plan usage, and account deletion.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::components::quota_bar::QuotaBar;
use crate::components::toast_host::show_error;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::show_success;
use crate::net::api::ProfileUpdate;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::format::format_date;

const FREE_PLAN_VIDEO_LIMIT: i32 = 3;

/// Plan display name derived from the account's monthly video quota.
pub(crate) fn plan_name(max_videos_per_month: i32) -> &'static str {
    if max_videos_per_month <= FREE_PLAN_VIDEO_LIMIT {
        "Free"
    } else {
        "Pro"
    }
}

/// Patch payload for a name change, or `Err` when the input is unusable.
pub(crate) fn build_name_update(full_name: &str) -> Result<ProfileUpdate, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name.");
    }
    Ok(ProfileUpdate {
        full_name: Some(full_name.to_owned()),
        ..ProfileUpdate::default()
    })
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let full_name = RwSignal::new(String::new());
    let name_seeded = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let show_delete = RwSignal::new(false);

    // Seed the form once the restored profile lands in context.
    Effect::new(move || {
        if name_seeded.get_untracked() {
            return;
        }
        if let Some(user) = session.get().user {
            full_name.set(user.full_name);
            name_seeded.set(true);
        }
    });

    let save_profile = move || {
        if saving.get() {
            return;
        }
        let update = match build_name_update(&full_name.get()) {
            Ok(update) => update,
            Err(message) => {
                show_error(toasts, message);
                return;
            }
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_me(&update).await {
                Ok(user) => {
                    session.update(|s| s.user = Some(user));
                    show_success(toasts, "Profile updated");
                }
                Err(e) => show_error(toasts, e.user_message()),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
            saving.set(false);
        }
    };

    let on_delete_cancel = Callback::new(move |()| show_delete.set(false));

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Settings"</h1>
                <p class="page-header__subtitle">"Profile, plan, and account controls"</p>
            </header>

            <section class="panel">
                <h2 class="panel__title">"Profile"</h2>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        disabled=true
                        prop:value=move || {
                            session.get().user.map(|u| u.email).unwrap_or_default()
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Full name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || saving.get()
                    on:click=move |_| save_profile()
                >
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Plan and usage"</h2>
                {move || {
                    session
                        .get()
                        .user
                        .map(|user| {
                            view! {
                                <div class="plan-summary">
                                    <span class="plan-summary__name">
                                        {format!("{} plan", plan_name(user.max_videos_per_month))}
                                    </span>
                                    <span class="plan-summary__since">
                                        {format!("Member since {}", format_date(&user.created_at))}
                                    </span>
                                </div>
                                <p>
                                    {format!(
                                        "{} of {} videos generated this month | up to {} active series",
                                        user.videos_generated_this_month,
                                        user.max_videos_per_month,
                                        user.max_series,
                                    )}
                                </p>
                                <QuotaBar
                                    used=user.videos_generated_this_month
                                    max=user.max_videos_per_month
                                />
                            }
                        })
                }}
            </section>

            <section class="panel panel--danger">
                <h2 class="panel__title">"Danger zone"</h2>
                <p>"Deleting your account removes every series, video, and connection."</p>
                <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                    "Delete account"
                </button>
            </section>

            <Show when=move || show_delete.get()>
                <DeleteAccountDialog on_cancel=on_delete_cancel/>
            </Show>
        </DashboardLayout>
    }
}

/// Final confirmation before irreversible account deletion.
#[component]
fn DeleteAccountDialog(on_cancel: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let submit = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_me().await {
                Ok(()) => {
                    crate::net::http::clear_tokens();
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/auth");
                    }
                }
                Err(e) => show_error(toasts, e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
        }
        on_cancel.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete account"</h2>
                <p class="dialog__danger">
                    "This cannot be undone. All of your content will be permanently removed."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit()>
                        "Delete my account"
                    </button>
                </div>
            </div>
        </div>
    }
}

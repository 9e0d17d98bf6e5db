//! Publishing connections: linked platform accounts and recent publish jobs.

#[cfg(test)]
#[path = "connections_test.rs"]
mod connections_test;

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::{show_error, show_info, show_success};
use crate::net::types::{PlatformConnection, PublishJob};
use crate::state::toast::ToastState;
use crate::util::format::format_date;

/// Platforms the product can publish to, in display order.
pub(crate) const PLATFORMS: &[(&str, &str)] = &[
    ("youtube", "YouTube Shorts"),
    ("tiktok", "TikTok"),
    ("instagram", "Instagram Reels"),
];

/// The active connection for a platform, if the user linked one.
pub(crate) fn find_active_connection<'a>(
    connections: &'a [PlatformConnection],
    platform: &str,
) -> Option<&'a PlatformConnection> {
    connections
        .iter()
        .find(|c| c.platform == platform && c.is_active)
}

/// Account name shown on a linked platform card.
pub(crate) fn connection_display_name(connection: &PlatformConnection) -> String {
    connection
        .channel_name
        .clone()
        .or_else(|| connection.platform_username.clone())
        .unwrap_or_else(|| "Connected account".to_owned())
}

#[component]
pub fn ConnectionsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let connections = RwSignal::new(Vec::<PlatformConnection>::new());
    let jobs = RwSignal::new(Vec::<PublishJob>::new());
    let loading = RwSignal::new(true);
    let refresh_seq = RwSignal::new(0u32);

    Effect::new(move || {
        refresh_seq.get();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::list_connections().await {
                    Ok(value) => {
                        connections.set(value);
                        loading.set(false);
                    }
                    Err(e) => {
                        loading.set(false);
                        show_error(toasts, e.user_message());
                    }
                }
            });
            leptos::task::spawn_local(async move {
                match crate::net::api::list_publish_jobs(None).await {
                    Ok(value) => jobs.set(value),
                    Err(e) => show_error(toasts, e.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (connections, jobs, loading, toasts);
        }
    });

    // OAuth hand-off opens in a platform popup; until the callback route
    // lands this only explains the flow.
    let on_connect = move |platform_label: &'static str| {
        #[cfg(feature = "hydrate")]
        show_info(
            toasts,
            format!("{platform_label} linking opens in a popup. Coming soon."),
        );
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = platform_label;
        }
    };

    let on_disconnect = move |connection_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::disconnect_platform(&connection_id).await {
                Ok(()) => {
                    show_success(toasts, "Account disconnected");
                    refresh_seq.update(|seq| *seq += 1);
                }
                Err(e) => show_error(toasts, e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = connection_id;
        }
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Platform connections"</h1>
                <p class="page-header__subtitle">"Link the accounts your videos publish to"</p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="panel__empty">"Loading connections..."</p> }
            >
                <div class="connection-grid">
                    {PLATFORMS
                        .iter()
                        .map(|&(platform, label)| {
                            view! {
                                <div class="connection-card">
                                    <h3 class="connection-card__title">{label}</h3>
                                    {move || {
                                        let list = connections.get();
                                        match find_active_connection(&list, platform) {
                                            Some(connection) => {
                                                let id = connection.id.clone();
                                                view! {
                                                    <p class="connection-card__account">
                                                        {connection_display_name(connection)}
                                                    </p>
                                                    <p class="connection-card__since">
                                                        {format!(
                                                            "Linked {}",
                                                            format_date(&connection.created_at),
                                                        )}
                                                    </p>
                                                    <button
                                                        class="btn btn--danger-outline"
                                                        on:click=move |_| on_disconnect(id.clone())
                                                    >
                                                        "Disconnect"
                                                    </button>
                                                }
                                                    .into_any()
                                            }
                                            None => {
                                                view! {
                                                    <p class="connection-card__account">"Not connected"</p>
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| on_connect(label)
                                                    >
                                                        "Connect"
                                                    </button>
                                                }
                                                    .into_any()
                                            }
                                        }
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <section class="panel">
                <h2 class="panel__title">"Recent publish jobs"</h2>
                <Show
                    when=move || !jobs.get().is_empty()
                    fallback=|| view! { <p class="panel__empty">"No publish activity yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Platform"</th>
                                <th>"Status"</th>
                                <th>"When"</th>
                                <th>"Detail"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                jobs.get()
                                    .into_iter()
                                    .map(|job| {
                                        view! {
                                            <tr>
                                                <td class="data-table__name">{job.platform.clone()}</td>
                                                <td>{job.status.clone()}</td>
                                                <td>{format_date(&job.created_at)}</td>
                                                <td>{job.error_message.clone().unwrap_or_default()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>
        </DashboardLayout>
    }
}

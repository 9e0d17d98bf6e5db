//! Dashboard overview: aggregate stats, quota usage, and recent episodes.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The stats query and the
//! recent-videos query are independent and race freely; each renders as it
//! arrives. Failed queries keep whatever was previously displayed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::components::quota_bar::QuotaBar;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::net::types::{DashboardStats, User, Video};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::format::{format_count, format_date};

/// How many recent episodes the overview lists.
const RECENT_LIMIT: usize = 5;

fn greeting_name(user: Option<&User>) -> String {
    match user {
        Some(u) if !u.full_name.trim().is_empty() => u.full_name.clone(),
        _ => "there".to_owned(),
    }
}

fn recent_window(mut items: Vec<Video>) -> Vec<Video> {
    items.truncate(RECENT_LIMIT);
    items
}

fn episode_title(video: &Video) -> String {
    if video.title.trim().is_empty() {
        format!("Episode {}", video.episode_number)
    } else {
        video.title.clone()
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let stats = RwSignal::new(None::<DashboardStats>);
    let recent = RwSignal::new(Vec::<Video>::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::dashboard_stats().await {
                    Ok(value) => stats.set(Some(value)),
                    Err(e) => crate::components::toast_host::show_error(toasts, e.user_message()),
                }
            });
            leptos::task::spawn_local(async move {
                let params = crate::net::api::VideoListParams {
                    page: Some(1),
                    ..crate::net::api::VideoListParams::default()
                };
                match crate::net::api::list_videos(&params).await {
                    Ok(page) => recent.set(recent_window(page.items)),
                    Err(e) => crate::components::toast_host::show_error(toasts, e.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (stats, recent, toasts);
        }
    });

    let quota = move || {
        session
            .get()
            .user
            .map(|u| (u.videos_generated_this_month, u.max_videos_per_month))
    };

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>
                    {move || format!("Welcome, {}!", greeting_name(session.get().user.as_ref()))}
                </h1>
                <p class="page-header__subtitle">"Your AutoShorts control panel"</p>
            </header>

            <div class="stat-grid">
                {move || {
                    let current = stats.get().unwrap_or_default();
                    view! {
                        <StatCard
                            label="Series"
                            value=format_count(current.total_series)
                            accent="stat-card--series"
                        />
                        <StatCard
                            label="Videos"
                            value=format_count(current.total_videos)
                            accent="stat-card--videos"
                        />
                        <StatCard
                            label="Views"
                            value=format_count(current.total_views)
                            accent="stat-card--views"
                        />
                        <StatCard
                            label="Likes"
                            value=format_count(current.total_likes)
                            accent="stat-card--likes"
                        />
                    }
                }}
            </div>

            <div class="quick-links">
                <a class="quick-link" href="/series">
                    <span class="quick-link__title">"New series"</span>
                    <span class="quick-link__hint">"Create a recurring video concept"</span>
                </a>
                <a class="quick-link" href="/analytics">
                    <span class="quick-link__title">"Analytics"</span>
                    <span class="quick-link__hint">"Stats and results"</span>
                </a>
            </div>

            <section class="panel">
                <h2>"Quota usage"</h2>
                {move || {
                    let (used, max) = quota().unwrap_or((0, 0));
                    view! { <QuotaBar used=used max=max/> }
                }}
            </section>

            <section class="panel">
                <div class="panel__header">
                    <h2>"Recent videos"</h2>
                    <a class="panel__more" href="/videos">
                        "View all"
                    </a>
                </div>
                <Show
                    when=move || !recent.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="panel__empty">
                                "No videos yet. Create your first series to get started!"
                            </p>
                        }
                    }
                >
                    <ul class="recent-list">
                        {move || {
                            recent
                                .get()
                                .into_iter()
                                .map(|video| {
                                    view! {
                                        <li class="recent-list__row">
                                            <span class="recent-list__title">
                                                {episode_title(&video)}
                                            </span>
                                            <span class="recent-list__date">
                                                {format_date(&video.created_at)}
                                            </span>
                                            <StatusBadge status=video.status/>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </section>
        </DashboardLayout>
    }
}

//! Account analytics: overview cards plus a per-series results table.

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::components::stat_card::StatCard;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::show_error;
use crate::net::types::{DashboardStats, SeriesStats};
use crate::state::toast::ToastState;
use crate::util::format::{format_count, format_percent};

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let overview = RwSignal::new(None::<DashboardStats>);
    let rows = RwSignal::new(Vec::<SeriesStats>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::dashboard_stats().await {
                    Ok(value) => overview.set(Some(value)),
                    Err(e) => show_error(toasts, e.user_message()),
                }
            });
            leptos::task::spawn_local(async move {
                match crate::net::api::series_stats().await {
                    Ok(value) => {
                        rows.set(value);
                        loading.set(false);
                    }
                    Err(e) => {
                        loading.set(false);
                        show_error(toasts, e.user_message());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (overview, rows, loading, toasts);
        }
    });

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Analytics"</h1>
                <p class="page-header__subtitle">"How your series perform across platforms"</p>
            </header>

            <div class="stat-grid">
                {move || {
                    let stats = overview.get().unwrap_or_default();
                    view! {
                        <StatCard label="Total views" value=format_count(stats.total_views)/>
                        <StatCard label="Total likes" value=format_count(stats.total_likes)/>
                        <StatCard
                            label="Published videos"
                            value=format_count(stats.published_videos)
                        />
                        <StatCard
                            label="Avg retention"
                            value=format_percent(stats.avg_retention_rate)
                            accent="accent"
                        />
                    }
                }}
            </div>

            <section class="panel">
                <h2 class="panel__title">"Results by series"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="panel__empty">"Loading analytics..."</p> }
                >
                    <Show
                        when=move || !rows.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="panel__empty">
                                    "No published videos yet. Results appear once episodes go live."
                                </p>
                            }
                        }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Series"</th>
                                    <th>"Episodes"</th>
                                    <th>"Published"</th>
                                    <th>"Views"</th>
                                    <th>"Avg views"</th>
                                    <th>"Likes"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    rows.get()
                                        .into_iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td class="data-table__name">{row.title.clone()}</td>
                                                    <td>{row.total_episodes}</td>
                                                    <td>{row.published}</td>
                                                    <td>{format_count(row.total_views)}</td>
                                                    <td>{format_count(row.avg_views)}</td>
                                                    <td>{format_count(row.total_likes)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>
        </DashboardLayout>
    }
}

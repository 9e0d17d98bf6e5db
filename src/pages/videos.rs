//! Video review queue: filterable list, detail view, approve and
//! regenerate actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! While any listed episode is still in the pipeline the page schedules a
//! delayed refetch every ten seconds. Each fetch bumps an epoch counter so
//! a stale sleeper wakes up, notices the epoch moved, and does nothing.

#[cfg(test)]
#[path = "videos_test.rs"]
mod videos_test;

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::components::status_badge::StatusBadge;
use crate::components::toast_host::show_error;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::show_success;
use crate::net::api::VideoListParams;
use crate::net::types::{Video, VideoStatus};
use crate::state::toast::ToastState;
use crate::util::format::format_date;

#[cfg(feature = "hydrate")]
const POLL_INTERVAL_SECS: u64 = 10;

/// Chips shown above the list. `None` means no status filter.
pub(crate) const STATUS_FILTERS: &[(Option<VideoStatus>, &str)] = &[
    (None, "All"),
    (Some(VideoStatus::Pending), "Pending"),
    (Some(VideoStatus::ReadyForReview), "Ready for review"),
    (Some(VideoStatus::Approved), "Approved"),
    (Some(VideoStatus::Published), "Published"),
    (Some(VideoStatus::Failed), "Failed"),
];

pub(crate) fn can_approve(status: VideoStatus) -> bool {
    status == VideoStatus::ReadyForReview
}

pub(crate) fn can_regenerate(status: VideoStatus) -> bool {
    status == VideoStatus::Failed
}

pub(crate) fn any_processing(videos: &[Video]) -> bool {
    videos.iter().any(|v| v.status.is_processing())
}

pub(crate) fn display_title(video: &Video) -> String {
    if video.title.trim().is_empty() {
        format!("Episode {}", video.episode_number)
    } else {
        video.title.clone()
    }
}

/// Channel checkbox states to the wire list the approve endpoint expects.
pub(crate) fn selected_channels(youtube: bool, tiktok: bool, instagram: bool) -> Vec<String> {
    let mut channels = Vec::new();
    if youtube {
        channels.push("youtube".to_owned());
    }
    if tiktok {
        channels.push("tiktok".to_owned());
    }
    if instagram {
        channels.push("instagram".to_owned());
    }
    channels
}

#[component]
pub fn VideosPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let items = RwSignal::new(Vec::<Video>::new());
    let loading = RwSignal::new(true);
    let active_filter = RwSignal::new(None::<VideoStatus>);
    let refresh_seq = RwSignal::new(0u32);
    let poll_epoch = RwSignal::new(0u32);
    let selected = RwSignal::new(None::<Video>);
    let approve_target = RwSignal::new(None::<Video>);

    Effect::new(move || {
        refresh_seq.get();
        let filter = active_filter.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let params = VideoListParams {
                status_filter: filter,
                page: Some(1),
                ..VideoListParams::default()
            };
            match crate::net::api::list_videos(&params).await {
                Ok(page) => {
                    let needs_poll = any_processing(&page.items);
                    items.set(page.items);
                    loading.set(false);
                    let epoch = poll_epoch.get_untracked() + 1;
                    poll_epoch.set(epoch);
                    if needs_poll {
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::sleep(std::time::Duration::from_secs(
                                POLL_INTERVAL_SECS,
                            ))
                            .await;
                            // A newer fetch supersedes this sleeper.
                            if poll_epoch.get_untracked() == epoch {
                                refresh_seq.update(|seq| *seq += 1);
                            }
                        });
                    }
                }
                Err(e) => {
                    loading.set(false);
                    show_error(toasts, e.user_message());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (filter, poll_epoch, toasts, items, loading);
        }
    });

    let on_regenerate = move |video_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::regenerate_video(&video_id).await {
                Ok(_) => {
                    show_success(toasts, "Regeneration started");
                    refresh_seq.update(|seq| *seq += 1);
                }
                Err(e) => show_error(toasts, e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = video_id;
        }
    };

    let on_detail_close = Callback::new(move |()| selected.set(None));
    let on_approve_close = Callback::new(move |()| approve_target.set(None));

    view! {
        <DashboardLayout>
            <header class="page-header">
                <h1>"Videos"</h1>
                <p class="page-header__subtitle">"Review, approve, and track your episodes"</p>
            </header>

            <div class="filter-chips">
                {STATUS_FILTERS
                    .iter()
                    .map(|&(filter, label)| {
                        view! {
                            <button
                                class="filter-chip"
                                class:filter-chip--active=move || active_filter.get() == filter
                                on:click=move |_| active_filter.set(filter)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="panel__empty">"Loading videos..."</p> }
            >
                <Show
                    when=move || !items.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="panel panel--empty">
                                <h3>"No videos here"</h3>
                                <p>"Generate an episode from one of your series to get started."</p>
                            </div>
                        }
                    }
                >
                    <div class="video-list">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|video| {
                                    let open_video = video.clone();
                                    let approve_video = video.clone();
                                    let regenerate_id = video.id.clone();
                                    view! {
                                        <div class="video-row" on:click=move |_| {
                                            selected.set(Some(open_video.clone()));
                                        }>
                                            <div class="video-row__main">
                                                <span class="video-row__title">{display_title(&video)}</span>
                                                <Show when={
                                                    let has_hook = !video.hook_text.is_empty();
                                                    move || has_hook
                                                }>
                                                    <span class="video-row__hook">{video.hook_text.clone()}</span>
                                                </Show>
                                                <span class="video-row__meta">
                                                    {format!(
                                                        "Episode {} | {}",
                                                        video.episode_number,
                                                        format_date(&video.created_at),
                                                    )}
                                                </span>
                                            </div>
                                            <StatusBadge status=video.status/>
                                            <div class="video-row__actions">
                                                <Show when={
                                                    let status = video.status;
                                                    move || can_approve(status)
                                                }>
                                                    {
                                                        let approve_video = approve_video.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--primary btn--small"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    approve_target.set(Some(approve_video.clone()));
                                                                }
                                                            >
                                                                "Approve"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                                <Show when={
                                                    let status = video.status;
                                                    move || can_regenerate(status)
                                                }>
                                                    {
                                                        let regenerate_id = regenerate_id.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |ev| {
                                                                    ev.stop_propagation();
                                                                    on_regenerate(regenerate_id.clone());
                                                                }
                                                            >
                                                                "Retry"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || selected.get().is_some()>
                {move || {
                    selected
                        .get()
                        .map(|video| view! { <VideoDetailDialog video=video on_close=on_detail_close/> })
                }}
            </Show>
            <Show when=move || approve_target.get().is_some()>
                {move || {
                    approve_target
                        .get()
                        .map(|video| {
                            view! {
                                <ApproveDialog
                                    video=video
                                    on_close=on_approve_close
                                    refresh_seq=refresh_seq
                                />
                            }
                        })
                }}
            </Show>
        </DashboardLayout>
    }
}

/// Read-only detail view of an episode.
#[component]
fn VideoDetailDialog(video: Video, on_close: Callback<()>) -> impl IntoView {
    let title = display_title(&video);
    let error = video.error_message.clone();
    let video_url = video.video_url.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__head">
                    <h2>{title}</h2>
                    <StatusBadge status=video.status/>
                </div>
                <Show when={
                    let has_error = error.is_some();
                    move || has_error
                }>
                    <p class="dialog__danger">{error.clone().unwrap_or_default()}</p>
                </Show>
                <Show when={
                    let has_hook = !video.hook_text.is_empty();
                    move || has_hook
                }>
                    <section class="dialog__section">
                        <h3>"Hook"</h3>
                        <p>{video.hook_text.clone()}</p>
                    </section>
                </Show>
                <Show when={
                    let has_script = !video.script.is_empty();
                    move || has_script
                }>
                    <section class="dialog__section">
                        <h3>"Script"</h3>
                        <p class="dialog__script">{video.script.clone()}</p>
                    </section>
                </Show>
                <section class="dialog__section">
                    <h3>"Performance"</h3>
                    <p>
                        {format!(
                            "{} views | {} likes | {} comments",
                            video.metrics.views,
                            video.metrics.likes,
                            video.metrics.comments,
                        )}
                    </p>
                </section>
                <Show when={
                    let has_url = video_url.is_some();
                    move || has_url
                }>
                    <a
                        class="btn btn--primary"
                        href=video_url.clone().unwrap_or_default()
                        target="_blank"
                    >
                        "Watch video"
                    </a>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Channel picker shown before submitting an approval.
#[component]
fn ApproveDialog(video: Video, on_close: Callback<()>, refresh_seq: RwSignal<u32>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let youtube = RwSignal::new(true);
    let tiktok = RwSignal::new(false);
    let instagram = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let video_id = video.id.clone();
    let title = display_title(&video);

    let submit = move || {
        if pending.get() {
            return;
        }
        let channels = selected_channels(youtube.get(), tiktok.get(), instagram.get());
        if channels.is_empty() {
            show_error(toasts, "Select at least one platform.");
            return;
        }
        pending.set(true);
        let id = video_id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::approve_video(&id, &channels, None).await {
                Ok(_) => {
                    show_success(toasts, "Video approved for publishing!");
                    refresh_seq.update(|seq| *seq += 1);
                    on_close.run(());
                }
                Err(e) => {
                    show_error(toasts, e.user_message());
                    pending.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, channels, refresh_seq);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Approve episode"</h2>
                <p class="dialog__subtitle">{title}</p>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || youtube.get()
                        on:change=move |_| youtube.update(|v| *v = !*v)
                    />
                    "YouTube Shorts"
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || tiktok.get()
                        on:change=move |_| tiktok.update(|v| *v = !*v)
                    />
                    "TikTok"
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || instagram.get()
                        on:change=move |_| instagram.update(|v| *v = !*v)
                    />
                    "Instagram Reels"
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=move |_| submit()
                    >
                        {move || if pending.get() { "Approving..." } else { "Approve" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

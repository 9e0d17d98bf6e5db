//! Series management: card grid, creation modal, delete and generate actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mutations never patch the local list; every success bumps the refetch
//! sequence and the authoritative list is re-read from the server.

#[cfg(test)]
#[path = "series_test.rs"]
mod series_test;

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::components::toast_host::show_error;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::show_success;
use crate::net::types::{PublishChannels, Series, SeriesCreateInput};
use crate::state::toast::ToastState;

const MIN_DURATION_SECS: i32 = 15;
const MAX_DURATION_SECS: i32 = 180;
const PAGE_SIZE: i64 = 20;

pub(crate) fn validate_series_input(
    title: &str,
    topic: &str,
) -> Result<(String, String), &'static str> {
    let title = title.trim();
    let topic = topic.trim();
    if title.is_empty() {
        return Err("Enter a series title.");
    }
    if topic.is_empty() {
        return Err("Describe the series topic.");
    }
    Ok((title.to_owned(), topic.to_owned()))
}

pub(crate) fn clamp_duration(seconds: i32) -> i32 {
    seconds.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS)
}

pub(crate) fn build_create_input(
    title: String,
    topic: String,
    description: String,
    language: String,
    tone: String,
    duration_seconds: i32,
    tts_provider: String,
) -> SeriesCreateInput {
    SeriesCreateInput {
        title,
        topic,
        description: if description.trim().is_empty() {
            None
        } else {
            Some(description)
        },
        language: Some(language),
        tone: Some(tone),
        target_duration_seconds: Some(clamp_duration(duration_seconds)),
        tts_provider: Some(tts_provider),
        ..SeriesCreateInput::default()
    }
}

/// `"3x / week at 14:00"` from the series schedule.
pub(crate) fn schedule_summary(series: &Series) -> String {
    let per_week = series.schedule_config.days.len();
    format!("{per_week}x / week at {}", series.schedule_config.time_utc)
}

/// Compact enabled-channel listing, e.g. `"YT · TikTok"`.
pub(crate) fn channel_summary(channels: PublishChannels) -> String {
    let mut parts = Vec::new();
    if channels.youtube {
        parts.push("YT");
    }
    if channels.tiktok {
        parts.push("TikTok");
    }
    if channels.instagram {
        parts.push("IG");
    }
    if parts.is_empty() {
        "No channels".to_owned()
    } else {
        parts.join(" · ")
    }
}

#[component]
pub fn SeriesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let items = RwSignal::new(Vec::<Series>::new());
    let loading = RwSignal::new(true);
    let refresh_seq = RwSignal::new(0u32);
    let show_create = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<String>);

    Effect::new(move || {
        refresh_seq.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_series(1, PAGE_SIZE).await {
                Ok(page) => {
                    items.set(page.items);
                    loading.set(false);
                }
                Err(e) => {
                    loading.set(false);
                    show_error(toasts, e.user_message());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (items, loading, toasts);
        }
    });

    let on_generate = move |series_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_video(&series_id, None).await {
                Ok(_) => show_success(toasts, "Video generation started!"),
                Err(e) => show_error(toasts, e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = series_id;
        }
    };

    let on_create_open = move |_| show_create.set(true);
    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    view! {
        <DashboardLayout>
            <header class="page-header page-header--split">
                <div>
                    <h1>"Video series"</h1>
                    <p class="page-header__subtitle">"Manage your recurring concepts"</p>
                </div>
                <button class="btn btn--primary" on:click=on_create_open>
                    "+ New series"
                </button>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="panel__empty">"Loading series..."</p> }
            >
                <Show
                    when=move || !items.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="panel panel--empty">
                                <h3>"No series yet"</h3>
                                <p>"Create your first series to start generating videos."</p>
                                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                                    "Create series"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="series-grid">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|series| {
                                    let generate_id = series.id.clone();
                                    let delete_id = series.id.clone();
                                    view! {
                                        <div class="series-card">
                                            <div class="series-card__head">
                                                <h3 class="series-card__title">{series.title.clone()}</h3>
                                                <span
                                                    class="status-badge"
                                                    class:status-badge--active=series.is_active
                                                    class:status-badge--paused=!series.is_active
                                                >
                                                    {if series.is_active { "Active" } else { "Paused" }}
                                                </span>
                                            </div>
                                            <p class="series-card__topic">{series.topic.clone()}</p>
                                            <ul class="series-card__facts">
                                                <li>{schedule_summary(&series)}</li>
                                                <li>
                                                    {format!(
                                                        "Language: {} | Tone: {} | {}s",
                                                        series.language,
                                                        series.tone,
                                                        series.target_duration_seconds,
                                                    )}
                                                </li>
                                                <li>
                                                    {format!(
                                                        "Episodes: {} | {}",
                                                        series.total_episodes,
                                                        channel_summary(series.publish_channels),
                                                    )}
                                                </li>
                                            </ul>
                                            <div class="series-card__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| on_generate(generate_id.clone())
                                                >
                                                    "Generate"
                                                </button>
                                                <button
                                                    class="btn btn--danger-outline"
                                                    on:click=move |_| delete_target.set(Some(delete_id.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || show_create.get()>
                <CreateSeriesDialog on_cancel=on_create_cancel refresh_seq=refresh_seq/>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <DeleteSeriesDialog
                    series_id=delete_target
                    on_cancel=on_delete_cancel
                    refresh_seq=refresh_seq
                />
            </Show>
        </DashboardLayout>
    }
}

/// Modal form for creating a new series.
#[component]
fn CreateSeriesDialog(on_cancel: Callback<()>, refresh_seq: RwSignal<u32>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let title = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let language = RwSignal::new("en".to_owned());
    let tone = RwSignal::new("educational".to_owned());
    let duration = RwSignal::new(60i32);
    let tts_provider = RwSignal::new("elevenlabs".to_owned());
    let pending = RwSignal::new(false);

    let submit = move || {
        if pending.get() {
            return;
        }
        let (title_value, topic_value) = match validate_series_input(&title.get(), &topic.get()) {
            Ok(values) => values,
            Err(message) => {
                show_error(toasts, message);
                return;
            }
        };
        let input = build_create_input(
            title_value,
            topic_value,
            description.get(),
            language.get(),
            tone.get(),
            duration.get(),
            tts_provider.get(),
        );
        pending.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_series(&input).await {
                Ok(_) => {
                    show_success(toasts, "Series created!");
                    refresh_seq.update(|seq| *seq += 1);
                    on_cancel.run(());
                }
                Err(e) => {
                    show_error(toasts, e.user_message());
                    pending.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, refresh_seq, toasts);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"New series"</h2>
                <label class="dialog__label">
                    "Series title *"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. Personal finance"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Topic *"
                    <textarea
                        class="dialog__input dialog__input--area"
                        placeholder="e.g. Practical advice on saving, investing, and budgeting"
                        prop:value=move || topic.get()
                        on:input=move |ev| topic.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--area"
                        placeholder="Optional description..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Language"
                        <select
                            class="dialog__input"
                            prop:value=move || language.get()
                            on:change=move |ev| language.set(event_target_value(&ev))
                        >
                            <option value="en">"English"</option>
                            <option value="pl">"Polski"</option>
                            <option value="de">"Deutsch"</option>
                            <option value="es">"Español"</option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Narration tone"
                        <select
                            class="dialog__input"
                            prop:value=move || tone.get()
                            on:change=move |ev| tone.set(event_target_value(&ev))
                        >
                            <option value="educational">"Educational"</option>
                            <option value="entertaining">"Entertaining"</option>
                            <option value="motivational">"Motivational"</option>
                            <option value="informative">"Informative"</option>
                            <option value="humorous">"Humorous"</option>
                        </select>
                    </label>
                </div>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Video length (seconds)"
                        <input
                            class="dialog__input"
                            type="number"
                            min=MIN_DURATION_SECS
                            max=MAX_DURATION_SECS
                            prop:value=move || duration.get().to_string()
                            on:input=move |ev| {
                                duration.set(event_target_value(&ev).parse().unwrap_or(60));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "TTS provider"
                        <select
                            class="dialog__input"
                            prop:value=move || tts_provider.get()
                            on:change=move |ev| tts_provider.set(event_target_value(&ev))
                        >
                            <option value="elevenlabs">"ElevenLabs (best quality)"</option>
                            <option value="google">"Google TTS"</option>
                        </select>
                    </label>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=move |_| submit()
                    >
                        {move || if pending.get() { "Creating..." } else { "Create series" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Confirmation dialog before deleting a series and its episodes.
#[component]
fn DeleteSeriesDialog(
    series_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    refresh_seq: RwSignal<u32>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let submit = move || {
        let Some(id) = series_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_series(&id).await {
                Ok(()) => {
                    show_success(toasts, "Series deleted");
                    refresh_seq.update(|seq| *seq += 1);
                }
                Err(e) => show_error(toasts, e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, refresh_seq, toasts);
        }
        on_cancel.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete series"</h2>
                <p class="dialog__danger">
                    "This permanently deletes the series and all of its episodes."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit()>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

use super::*;
use crate::net::types::{VideoMetrics, VideoStatus};

fn video(n: i32, title: &str) -> Video {
    Video {
        id: format!("v-{n}"),
        series_id: "s-1".to_owned(),
        episode_number: n,
        title: title.to_owned(),
        hook_text: String::new(),
        script: String::new(),
        description: String::new(),
        tags: Vec::new(),
        status: VideoStatus::Published,
        error_message: None,
        voice_url: None,
        voice_duration_seconds: None,
        video_url: None,
        thumbnail_url: None,
        scenes: Vec::new(),
        media_assets: crate::net::types::MediaAssets::default(),
        scheduled_publish_at: None,
        published_at: None,
        metrics: VideoMetrics::default(),
        platform_ids: crate::net::types::PlatformIds::default(),
        created_at: "2026-02-01T12:00:00Z".to_owned(),
        updated_at: "2026-02-01T12:00:00Z".to_owned(),
    }
}

// =============================================================
// greeting_name
// =============================================================

#[test]
fn greeting_uses_full_name_when_present() {
    let user = crate::net::types::User {
        id: "u-1".to_owned(),
        email: "maria@example.com".to_owned(),
        full_name: "Maria Nowak".to_owned(),
        avatar_url: None,
        is_active: true,
        is_verified: true,
        max_series: 3,
        max_videos_per_month: 10,
        videos_generated_this_month: 0,
        created_at: "2026-01-10T09:00:00Z".to_owned(),
    };
    assert_eq!(greeting_name(Some(&user)), "Maria Nowak");
}

#[test]
fn greeting_falls_back_without_user_or_name() {
    assert_eq!(greeting_name(None), "there");
}

// =============================================================
// recent_window
// =============================================================

#[test]
fn recent_window_keeps_first_five() {
    let items: Vec<Video> = (1..=8).map(|n| video(n, "")).collect();
    let window = recent_window(items);
    assert_eq!(window.len(), RECENT_LIMIT);
    assert_eq!(window[0].episode_number, 1);
    assert_eq!(window[4].episode_number, 5);
}

#[test]
fn recent_window_passes_short_lists_through() {
    let items = vec![video(1, ""), video(2, "")];
    assert_eq!(recent_window(items).len(), 2);
}

// =============================================================
// episode_title
// =============================================================

#[test]
fn episode_title_prefers_server_title() {
    assert_eq!(episode_title(&video(3, "Why Rome fell")), "Why Rome fell");
}

#[test]
fn episode_title_falls_back_to_episode_number() {
    assert_eq!(episode_title(&video(3, "")), "Episode 3");
    assert_eq!(episode_title(&video(3, "   ")), "Episode 3");
}

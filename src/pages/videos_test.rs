use super::*;
use crate::net::types::{MediaAssets, PlatformIds, VideoMetrics};

fn video(status: VideoStatus, title: &str) -> Video {
    Video {
        id: "v-1".into(),
        series_id: "se-1".into(),
        episode_number: 7,
        title: title.into(),
        hook_text: String::new(),
        script: String::new(),
        description: String::new(),
        tags: Vec::new(),
        status,
        error_message: None,
        voice_url: None,
        voice_duration_seconds: None,
        video_url: None,
        thumbnail_url: None,
        scenes: Vec::new(),
        media_assets: MediaAssets::default(),
        scheduled_publish_at: None,
        published_at: None,
        metrics: VideoMetrics::default(),
        platform_ids: PlatformIds::default(),
        created_at: "2026-08-20T10:00:00Z".into(),
        updated_at: "2026-08-20T10:00:00Z".into(),
    }
}

// =============================================================
// Row actions
// =============================================================

#[test]
fn approve_only_from_review() {
    assert!(can_approve(VideoStatus::ReadyForReview));
    assert!(!can_approve(VideoStatus::Pending));
    assert!(!can_approve(VideoStatus::Approved));
    assert!(!can_approve(VideoStatus::Failed));
}

#[test]
fn regenerate_only_from_failed() {
    assert!(can_regenerate(VideoStatus::Failed));
    assert!(!can_regenerate(VideoStatus::ReadyForReview));
    assert!(!can_regenerate(VideoStatus::Cancelled));
}

// =============================================================
// Polling trigger
// =============================================================

#[test]
fn processing_rows_trigger_polling() {
    let list = vec![
        video(VideoStatus::Published, "a"),
        video(VideoStatus::Rendering, "b"),
    ];
    assert!(any_processing(&list));
}

#[test]
fn settled_rows_do_not_poll() {
    let list = vec![
        video(VideoStatus::Published, "a"),
        video(VideoStatus::Failed, "b"),
        video(VideoStatus::Cancelled, "c"),
    ];
    assert!(!any_processing(&list));
    assert!(!any_processing(&[]));
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn display_title_falls_back_to_episode_number() {
    assert_eq!(display_title(&video(VideoStatus::Pending, "")), "Episode 7");
    assert_eq!(
        display_title(&video(VideoStatus::Pending, "How compounding works")),
        "How compounding works"
    );
}

#[test]
fn filter_chips_cover_terminal_and_review_states() {
    assert_eq!(STATUS_FILTERS[0], (None, "All"));
    assert!(
        STATUS_FILTERS
            .iter()
            .any(|&(f, _)| f == Some(VideoStatus::ReadyForReview))
    );
    assert!(
        STATUS_FILTERS
            .iter()
            .any(|&(f, _)| f == Some(VideoStatus::Failed))
    );
}

#[test]
fn channel_selection_maps_to_wire_names() {
    assert_eq!(
        selected_channels(true, false, true),
        vec!["youtube".to_owned(), "instagram".to_owned()]
    );
    assert!(selected_channels(false, false, false).is_empty());
}

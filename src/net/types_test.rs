use super::*;

// =============================================================
// VideoStatus serde
// =============================================================

#[test]
fn video_status_serializes_snake_case() {
    let json = serde_json::to_string(&VideoStatus::ReadyForReview).unwrap();
    assert_eq!(json, "\"ready_for_review\"");
}

#[test]
fn video_status_deserializes_pipeline_values() {
    let status: VideoStatus = serde_json::from_str("\"generating_script\"").unwrap();
    assert_eq!(status, VideoStatus::GeneratingScript);
    let status: VideoStatus = serde_json::from_str("\"fetching_media\"").unwrap();
    assert_eq!(status, VideoStatus::FetchingMedia);
}

#[test]
fn video_status_rejects_unknown_value() {
    let result: Result<VideoStatus, _> = serde_json::from_str("\"uploading\"");
    assert!(result.is_err());
}

#[test]
fn video_status_query_values_round_trip_through_serde() {
    let all = [
        VideoStatus::Pending,
        VideoStatus::GeneratingScript,
        VideoStatus::GeneratingHook,
        VideoStatus::GeneratingVoice,
        VideoStatus::FetchingMedia,
        VideoStatus::Rendering,
        VideoStatus::ReadyForReview,
        VideoStatus::Approved,
        VideoStatus::Publishing,
        VideoStatus::Published,
        VideoStatus::Failed,
        VideoStatus::Cancelled,
    ];
    for status in all {
        let expected = format!("\"{}\"", status.as_query());
        assert_eq!(serde_json::to_string(&status).unwrap(), expected);
    }
}

// =============================================================
// VideoStatus display mappings
// =============================================================

#[test]
fn video_status_labels_are_distinct() {
    let labels = [
        VideoStatus::Pending.label(),
        VideoStatus::GeneratingScript.label(),
        VideoStatus::GeneratingHook.label(),
        VideoStatus::GeneratingVoice.label(),
        VideoStatus::FetchingMedia.label(),
        VideoStatus::Rendering.label(),
        VideoStatus::ReadyForReview.label(),
        VideoStatus::Approved.label(),
        VideoStatus::Publishing.label(),
        VideoStatus::Published.label(),
        VideoStatus::Failed.label(),
        VideoStatus::Cancelled.label(),
    ];
    for (i, a) in labels.iter().enumerate() {
        for b in labels.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn pipeline_stages_count_as_processing() {
    assert!(VideoStatus::Pending.is_processing());
    assert!(VideoStatus::GeneratingScript.is_processing());
    assert!(VideoStatus::Rendering.is_processing());
    assert!(VideoStatus::Publishing.is_processing());
}

#[test]
fn settled_statuses_are_not_processing() {
    assert!(!VideoStatus::ReadyForReview.is_processing());
    assert!(!VideoStatus::Approved.is_processing());
    assert!(!VideoStatus::Published.is_processing());
    assert!(!VideoStatus::Failed.is_processing());
    assert!(!VideoStatus::Cancelled.is_processing());
}

#[test]
fn review_status_has_review_badge_class() {
    assert_eq!(VideoStatus::ReadyForReview.css_class(), "status-badge--review");
    assert_eq!(VideoStatus::Failed.css_class(), "status-badge--failed");
}

// =============================================================
// DTO decoding
// =============================================================

#[test]
fn user_decodes_quota_counters() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "maria@example.com",
        "full_name": "Maria Nowak",
        "avatar_url": null,
        "is_active": true,
        "is_verified": false,
        "max_series": 3,
        "max_videos_per_month": 10,
        "videos_generated_this_month": 4,
        "created_at": "2026-01-10T09:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.max_videos_per_month, 10);
    assert_eq!(user.videos_generated_this_month, 4);
    assert!(user.avatar_url.is_none());
}

#[test]
fn video_tolerates_missing_optional_collections() {
    let video: Video = serde_json::from_value(serde_json::json!({
        "id": "v-1",
        "series_id": "s-1",
        "episode_number": 7,
        "title": "",
        "hook_text": "",
        "script": "",
        "description": "",
        "status": "pending",
        "error_message": null,
        "voice_url": null,
        "voice_duration_seconds": null,
        "video_url": null,
        "thumbnail_url": null,
        "scheduled_publish_at": null,
        "published_at": null,
        "created_at": "2026-02-01T12:00:00Z",
        "updated_at": "2026-02-01T12:00:00Z"
    }))
    .unwrap();
    assert!(video.tags.is_empty());
    assert!(video.scenes.is_empty());
    assert_eq!(video.metrics, VideoMetrics::default());
    assert_eq!(video.platform_ids, PlatformIds::default());
}

#[test]
fn series_create_input_omits_unset_fields() {
    let input = SeriesCreateInput {
        title: "Personal finance".to_owned(),
        topic: "Saving and budgeting tips".to_owned(),
        language: Some("en".to_owned()),
        ..SeriesCreateInput::default()
    };
    let value = serde_json::to_value(&input).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get("title").unwrap(), "Personal finance");
    assert_eq!(object.get("language").unwrap(), "en");
    assert!(!object.contains_key("tone"));
    assert!(!object.contains_key("voice_id"));
}

#[test]
fn paginated_envelope_decodes_generic_items() {
    let page: Paginated<SeriesStats> = serde_json::from_value(serde_json::json!({
        "items": [{
            "series_id": "s-1",
            "title": "History shorts",
            "total_episodes": 12,
            "published": 9,
            "total_views": 150_000,
            "avg_views": 16_666,
            "total_likes": 4200
        }],
        "total": 1,
        "page": 1,
        "page_size": 20
    }))
    .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].published, 9);
}

#[test]
fn api_error_body_exposes_detail_verbatim() {
    let body: ApiErrorBody =
        serde_json::from_str(r#"{"detail":"Monthly video quota exceeded"}"#).unwrap();
    assert_eq!(body.detail, "Monthly video quota exceeded");
}

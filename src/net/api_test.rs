use super::*;

// =============================================================
// Auth bodies
// =============================================================

#[test]
fn login_body_carries_credentials() {
    assert_eq!(
        login_body("maria@example.com", "hunter2hunter2"),
        serde_json::json!({ "email": "maria@example.com", "password": "hunter2hunter2" })
    );
}

#[test]
fn register_body_uses_snake_case_full_name() {
    assert_eq!(
        register_body("maria@example.com", "hunter2hunter2", "Maria Nowak"),
        serde_json::json!({
            "email": "maria@example.com",
            "password": "hunter2hunter2",
            "full_name": "Maria Nowak"
        })
    );
}

// =============================================================
// Series paths
// =============================================================

#[test]
fn series_list_path_includes_pagination() {
    assert_eq!(series_list_path(1, 20), "/series?page=1&page_size=20");
    assert_eq!(series_list_path(3, 50), "/series?page=3&page_size=50");
}

#[test]
fn series_path_formats_id_segment() {
    assert_eq!(series_path("s-42"), "/series/s-42");
}

// =============================================================
// Video paths and bodies
// =============================================================

#[test]
fn videos_list_path_without_filters_is_bare() {
    assert_eq!(videos_list_path(&VideoListParams::default()), "/videos");
}

#[test]
fn videos_list_path_with_status_filter() {
    let params = VideoListParams {
        status_filter: Some(crate::net::types::VideoStatus::ReadyForReview),
        ..VideoListParams::default()
    };
    assert_eq!(
        videos_list_path(&params),
        "/videos?status_filter=ready_for_review"
    );
}

#[test]
fn videos_list_path_combines_all_filters_in_order() {
    let params = VideoListParams {
        series_id: Some("s-1".to_owned()),
        status_filter: Some(crate::net::types::VideoStatus::Failed),
        page: Some(2),
    };
    assert_eq!(
        videos_list_path(&params),
        "/videos?series_id=s-1&status_filter=failed&page=2"
    );
}

#[test]
fn video_action_paths_format_id_segments() {
    assert_eq!(video_path("v-1"), "/videos/v-1");
    assert_eq!(approve_path("v-1"), "/videos/v-1/approve");
    assert_eq!(regenerate_path("v-1"), "/videos/v-1/regenerate");
}

#[test]
fn generate_body_omits_absent_custom_topic() {
    assert_eq!(
        generate_body("s-1", None),
        serde_json::json!({ "series_id": "s-1" })
    );
}

#[test]
fn generate_body_includes_custom_topic_when_given() {
    assert_eq!(
        generate_body("s-1", Some("Roman aqueducts")),
        serde_json::json!({ "series_id": "s-1", "custom_topic": "Roman aqueducts" })
    );
}

#[test]
fn approve_body_lists_channels_without_schedule() {
    let channels = vec!["youtube".to_owned(), "tiktok".to_owned()];
    assert_eq!(
        approve_body(&channels, None),
        serde_json::json!({ "publish_channels": ["youtube", "tiktok"] })
    );
}

#[test]
fn approve_body_includes_scheduled_time_when_given() {
    let channels = vec!["youtube".to_owned()];
    assert_eq!(
        approve_body(&channels, Some("2026-09-01T14:00:00Z")),
        serde_json::json!({
            "publish_channels": ["youtube"],
            "scheduled_publish_at": "2026-09-01T14:00:00Z"
        })
    );
}

// =============================================================
// Users
// =============================================================

#[test]
fn profile_update_serializes_only_set_fields() {
    let update = ProfileUpdate {
        full_name: Some("Maria N.".to_owned()),
        avatar_url: None,
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({ "full_name": "Maria N." })
    );
}

// =============================================================
// Publishing paths and bodies
// =============================================================

#[test]
fn connection_path_formats_id_segment() {
    assert_eq!(connection_path("c-7"), "/publishing/connections/c-7");
}

#[test]
fn jobs_path_optionally_narrows_by_video() {
    assert_eq!(jobs_path(None), "/publishing/jobs");
    assert_eq!(jobs_path(Some("v-9")), "/publishing/jobs?video_id=v-9");
}

#[test]
fn connect_body_carries_oauth_exchange_fields() {
    assert_eq!(
        connect_body("youtube", "code-123", "https://app.example.com/callback"),
        serde_json::json!({
            "platform": "youtube",
            "auth_code": "code-123",
            "redirect_uri": "https://app.example.com/callback",
        })
    );
}

use super::*;

fn connection(platform: &str, active: bool) -> PlatformConnection {
    PlatformConnection {
        id: format!("conn-{platform}"),
        platform: platform.into(),
        platform_username: Some("@autoshorts".into()),
        channel_name: None,
        is_active: active,
        created_at: "2026-07-15T09:00:00Z".into(),
    }
}

// =============================================================
// Connection lookup
// =============================================================

#[test]
fn finds_active_connection_for_platform() {
    let list = vec![connection("youtube", true), connection("tiktok", true)];
    let found = find_active_connection(&list, "tiktok").unwrap();
    assert_eq!(found.platform, "tiktok");
}

#[test]
fn inactive_connections_are_ignored() {
    let list = vec![connection("youtube", false)];
    assert!(find_active_connection(&list, "youtube").is_none());
}

#[test]
fn unknown_platform_has_no_connection() {
    let list = vec![connection("youtube", true)];
    assert!(find_active_connection(&list, "instagram").is_none());
}

// =============================================================
// Display name
// =============================================================

#[test]
fn channel_name_wins_over_username() {
    let mut conn = connection("youtube", true);
    conn.channel_name = Some("AutoShorts Official".into());
    assert_eq!(connection_display_name(&conn), "AutoShorts Official");
}

#[test]
fn username_is_the_fallback() {
    let conn = connection("tiktok", true);
    assert_eq!(connection_display_name(&conn), "@autoshorts");
}

#[test]
fn placeholder_when_no_names_present() {
    let mut conn = connection("instagram", true);
    conn.platform_username = None;
    assert_eq!(connection_display_name(&conn), "Connected account");
}

// =============================================================
// Platform catalog
// =============================================================

#[test]
fn platform_catalog_is_stable() {
    let keys: Vec<&str> = PLATFORMS.iter().map(|&(k, _)| k).collect();
    assert_eq!(keys, vec!["youtube", "tiktok", "instagram"]);
}

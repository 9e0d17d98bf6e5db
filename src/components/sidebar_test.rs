use super::*;
use crate::net::types::User;

fn user_named(full_name: &str, email: &str) -> User {
    User {
        id: "u-1".to_owned(),
        email: email.to_owned(),
        full_name: full_name.to_owned(),
        avatar_url: None,
        is_active: true,
        is_verified: true,
        max_series: 3,
        max_videos_per_month: 10,
        videos_generated_this_month: 0,
        created_at: "2026-01-10T09:00:00Z".to_owned(),
    }
}

// =============================================================
// active_nav_href
// =============================================================

#[test]
fn exact_path_matches_its_entry() {
    assert_eq!(active_nav_href("/dashboard"), Some("/dashboard"));
    assert_eq!(active_nav_href("/series"), Some("/series"));
}

#[test]
fn nested_path_matches_parent_entry() {
    assert_eq!(active_nav_href("/series/s-1"), Some("/series"));
}

#[test]
fn longest_prefix_wins_for_nested_settings() {
    assert_eq!(
        active_nav_href("/settings/connections"),
        Some("/settings/connections")
    );
    assert_eq!(active_nav_href("/settings"), Some("/settings"));
}

#[test]
fn unknown_path_matches_nothing() {
    assert_eq!(active_nav_href("/auth"), None);
    assert_eq!(active_nav_href("/"), None);
}

// =============================================================
// identity_initial
// =============================================================

#[test]
fn initial_comes_from_full_name_first() {
    let user = user_named("maria nowak", "zz@example.com");
    assert_eq!(identity_initial(Some(&user)), "M");
}

#[test]
fn initial_falls_back_to_email_then_placeholder() {
    let user = user_named("", "kris@example.com");
    assert_eq!(identity_initial(Some(&user)), "K");
    assert_eq!(identity_initial(None), "U");
}

use super::*;

// =============================================================
// Plan naming
// =============================================================

#[test]
fn small_quota_is_free_plan() {
    assert_eq!(plan_name(3), "Free");
    assert_eq!(plan_name(1), "Free");
}

#[test]
fn larger_quota_is_pro_plan() {
    assert_eq!(plan_name(4), "Pro");
    assert_eq!(plan_name(30), "Pro");
}

// =============================================================
// Profile update payload
// =============================================================

#[test]
fn name_update_trims_whitespace() {
    let update = build_name_update("  Ada Lovelace  ").unwrap();
    assert_eq!(update.full_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(update.avatar_url, None);
}

#[test]
fn blank_name_is_rejected() {
    assert!(build_name_update("   ").is_err());
}

#[test]
fn name_update_serializes_only_changed_fields() {
    let update = build_name_update("Ada").unwrap();
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "full_name": "Ada" }));
}

use super::*;

// =============================================================
// format_date
// =============================================================

#[test]
fn format_date_renders_short_date() {
    assert_eq!(format_date("2026-02-03T12:30:00Z"), "Feb 3, 2026");
    assert_eq!(format_date("2025-11-21T00:00:00+02:00"), "Nov 21, 2025");
}

#[test]
fn format_date_passes_through_unparseable_input() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
}

// =============================================================
// format_count
// =============================================================

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn format_count_handles_negative_values() {
    assert_eq!(format_count(-42_000), "-42,000");
}

// =============================================================
// format_percent
// =============================================================

#[test]
fn format_percent_keeps_one_decimal() {
    assert_eq!(format_percent(42.55), "42.5%");
    assert_eq!(format_percent(0.0), "0.0%");
}

// =============================================================
// quota_percent
// =============================================================

#[test]
fn quota_percent_scales_usage() {
    assert_eq!(quota_percent(0, 10), 0);
    assert_eq!(quota_percent(4, 10), 40);
    assert_eq!(quota_percent(10, 10), 100);
}

#[test]
fn quota_percent_caps_overuse_at_one_hundred() {
    assert_eq!(quota_percent(15, 10), 100);
}

#[test]
fn quota_percent_with_non_positive_limit() {
    assert_eq!(quota_percent(0, 0), 0);
    assert_eq!(quota_percent(3, 0), 100);
    assert_eq!(quota_percent(-2, 10), 0);
}

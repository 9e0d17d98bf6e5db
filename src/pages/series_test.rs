use super::*;
use crate::net::types::{ScheduleConfig, VisualStyle};

fn sample_series() -> Series {
    Series {
        id: "se-1".into(),
        user_id: "u-1".into(),
        title: "Money Minute".into(),
        description: String::new(),
        topic: "personal finance".into(),
        prompt_template: String::new(),
        language: "en".into(),
        tone: "educational".into(),
        target_duration_seconds: 60,
        schedule_config: ScheduleConfig {
            frequency: "weekly".into(),
            days: vec!["mon".into(), "wed".into(), "fri".into()],
            time_utc: "14:00".into(),
            timezone: "UTC".into(),
        },
        publish_channels: PublishChannels::default(),
        visual_style: VisualStyle {
            font: "Inter".into(),
            font_size: 48,
            font_color: "#ffffff".into(),
            subtitle_position: "bottom".into(),
            transition: "fade".into(),
            background_music: true,
            branding_text: String::new(),
        },
        voice_id: None,
        tts_provider: "elevenlabs".into(),
        is_active: true,
        total_episodes: 12,
        created_at: "2026-08-01T00:00:00Z".into(),
        updated_at: "2026-08-01T00:00:00Z".into(),
    }
}

// =============================================================
// Input validation
// =============================================================

#[test]
fn validate_accepts_trimmed_title_and_topic() {
    let (title, topic) = validate_series_input("  Money Minute ", " finance tips ").unwrap();
    assert_eq!(title, "Money Minute");
    assert_eq!(topic, "finance tips");
}

#[test]
fn validate_rejects_blank_title() {
    assert!(validate_series_input("   ", "finance").is_err());
}

#[test]
fn validate_rejects_blank_topic() {
    assert!(validate_series_input("Money Minute", "").is_err());
}

// =============================================================
// Create payload assembly
// =============================================================

#[test]
fn build_create_input_drops_empty_description() {
    let input = build_create_input(
        "T".into(),
        "topic".into(),
        "   ".into(),
        "en".into(),
        "educational".into(),
        60,
        "elevenlabs".into(),
    );
    assert_eq!(input.description, None);
    assert_eq!(input.target_duration_seconds, Some(60));
    assert_eq!(input.prompt_template, None);
}

#[test]
fn build_create_input_keeps_description() {
    let input = build_create_input(
        "T".into(),
        "topic".into(),
        "deep dives".into(),
        "en".into(),
        "humorous".into(),
        90,
        "google".into(),
    );
    assert_eq!(input.description.as_deref(), Some("deep dives"));
    assert_eq!(input.tts_provider.as_deref(), Some("google"));
}

#[test]
fn duration_is_clamped_to_supported_range() {
    assert_eq!(clamp_duration(5), 15);
    assert_eq!(clamp_duration(60), 60);
    assert_eq!(clamp_duration(600), 180);
}

// =============================================================
// Card summaries
// =============================================================

#[test]
fn schedule_summary_counts_days() {
    assert_eq!(schedule_summary(&sample_series()), "3x / week at 14:00");
}

#[test]
fn channel_summary_lists_enabled_platforms() {
    let channels = PublishChannels {
        youtube: true,
        tiktok: false,
        instagram: true,
    };
    assert_eq!(channel_summary(channels), "YT · IG");
}

#[test]
fn channel_summary_handles_empty() {
    assert_eq!(channel_summary(PublishChannels::default()), "No channels");
}

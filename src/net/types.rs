//! Wire DTOs for the AutoShorts REST API (`/api/v1`).
//!
//! DESIGN
//! ======
//! These types intentionally mirror backend response schemas so serde
//! round-trips stay lossless. The server owns every entity lifecycle; the
//! client holds display copies only and refetches after each mutation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Short-lived bearer credential attached to every authorized request.
    pub access_token: String,
    /// Longer-lived credential used solely to mint new access tokens.
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// The signed-in account as returned by `/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    /// Plan limit on concurrently active series.
    pub max_series: i32,
    /// Plan limit on generated videos per calendar month.
    pub max_videos_per_month: i32,
    /// Quota counter reset server-side at the start of each month.
    pub videos_generated_this_month: i32,
    pub created_at: String,
}

/// Episode release cadence for a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub frequency: String,
    #[serde(default)]
    pub days: Vec<String>,
    pub time_utc: String,
    pub timezone: String,
}

/// Rendering presentation settings applied to every episode of a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    pub font: String,
    pub font_size: i32,
    pub font_color: String,
    pub subtitle_position: String,
    pub transition: String,
    pub background_music: bool,
    pub branding_text: String,
}

/// Per-platform publish toggles for a series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishChannels {
    pub youtube: bool,
    pub tiktok: bool,
    pub instagram: bool,
}

/// A recurring content concept that generates episodic videos on a schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub topic: String,
    pub prompt_template: String,
    pub language: String,
    pub tone: String,
    pub target_duration_seconds: i32,
    pub schedule_config: ScheduleConfig,
    pub publish_channels: PublishChannels,
    pub visual_style: VisualStyle,
    pub voice_id: Option<String>,
    pub tts_provider: String,
    pub is_active: bool,
    pub total_episodes: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update payload for a series; unset fields keep server defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesCreateInput {
    pub title: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_duration_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts_provider: Option<String>,
}

/// Backend-owned video pipeline status.
///
/// The server drives every transition; the client only renders labels and
/// decides which row actions apply. The mappings below are deliberately
/// exhaustive so a new backend status fails to compile here instead of
/// falling through to a silent default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    Pending,
    GeneratingScript,
    GeneratingHook,
    GeneratingVoice,
    FetchingMedia,
    Rendering,
    ReadyForReview,
    Approved,
    Publishing,
    Published,
    Failed,
    Cancelled,
}

impl VideoStatus {
    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::GeneratingScript => "Generating script",
            Self::GeneratingHook => "Generating hook",
            Self::GeneratingVoice => "Generating voice",
            Self::FetchingMedia => "Fetching media",
            Self::Rendering => "Rendering",
            Self::ReadyForReview => "Ready for review",
            Self::Approved => "Approved",
            Self::Publishing => "Publishing",
            Self::Published => "Published",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// BEM modifier applied to the status badge element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "status-badge--pending",
            Self::GeneratingScript | Self::GeneratingHook => "status-badge--generating",
            Self::GeneratingVoice => "status-badge--voice",
            Self::FetchingMedia => "status-badge--media",
            Self::Rendering => "status-badge--rendering",
            Self::ReadyForReview => "status-badge--review",
            Self::Approved => "status-badge--approved",
            Self::Publishing => "status-badge--publishing",
            Self::Published => "status-badge--published",
            Self::Failed => "status-badge--failed",
            Self::Cancelled => "status-badge--cancelled",
        }
    }

    /// Whether the pipeline is still working on this episode.
    /// Processing rows animate and keep the list polling.
    pub fn is_processing(self) -> bool {
        match self {
            Self::Pending
            | Self::GeneratingScript
            | Self::GeneratingHook
            | Self::GeneratingVoice
            | Self::FetchingMedia
            | Self::Rendering
            | Self::Publishing => true,
            Self::ReadyForReview
            | Self::Approved
            | Self::Published
            | Self::Failed
            | Self::Cancelled => false,
        }
    }

    /// Wire value used in `status_filter` query parameters.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::GeneratingScript => "generating_script",
            Self::GeneratingHook => "generating_hook",
            Self::GeneratingVoice => "generating_voice",
            Self::FetchingMedia => "fetching_media",
            Self::Rendering => "rendering",
            Self::ReadyForReview => "ready_for_review",
            Self::Approved => "approved",
            Self::Publishing => "publishing",
            Self::Published => "published",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Engagement counters reported by the publishing platforms.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetrics {
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub shares: i64,
    #[serde(default)]
    pub watch_time_seconds: f64,
    #[serde(default)]
    pub avg_view_duration: f64,
    #[serde(default)]
    pub retention_rate: f64,
}

/// One narrated segment of a rendered video.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub text: String,
    #[serde(default)]
    pub visual_description: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub duration_hint: Option<String>,
}

/// Stock footage and audio gathered for rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaAssets {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub clips: Vec<String>,
    #[serde(default)]
    pub music_track: Option<String>,
}

/// Per-platform identifiers assigned after publication.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformIds {
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub tiktok_id: Option<String>,
    #[serde(default)]
    pub instagram_id: Option<String>,
}

/// One generated short-video episode tied to a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub series_id: String,
    pub episode_number: i32,
    pub title: String,
    pub hook_text: String,
    pub script: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: VideoStatus,
    pub error_message: Option<String>,
    pub voice_url: Option<String>,
    pub voice_duration_seconds: Option<f64>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub media_assets: MediaAssets,
    pub scheduled_publish_at: Option<String>,
    pub published_at: Option<String>,
    #[serde(default)]
    pub metrics: VideoMetrics,
    #[serde(default)]
    pub platform_ids: PlatformIds,
    pub created_at: String,
    pub updated_at: String,
}

/// Aggregate account-wide numbers for the dashboard overview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_series: i64,
    pub total_videos: i64,
    pub published_videos: i64,
    pub total_views: i64,
    pub total_likes: i64,
    pub avg_retention_rate: f64,
    pub videos_this_month: i64,
}

/// One per-series row in the analytics results table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub series_id: String,
    pub title: String,
    pub total_episodes: i64,
    pub published: i64,
    pub total_views: i64,
    pub avg_views: i64,
    pub total_likes: i64,
}

/// An OAuth-linked external publishing account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformConnection {
    pub id: String,
    pub platform: String,
    pub platform_username: Option<String>,
    pub channel_name: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

/// A queued or completed publish attempt for one video/platform pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublishJob {
    pub id: String,
    pub video_id: String,
    pub platform: String,
    pub status: String,
    pub platform_video_id: Option<String>,
    pub error_message: Option<String>,
    pub created_at: String,
}

/// Standard paginated list envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Error envelope the backend attaches to 4xx responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

//! Typed request builders for the AutoShorts REST API.
//!
//! DESIGN
//! ======
//! Every function is a thin wrapper over `net::http::request_json`; none
//! carries its own auth, retry, or error handling, since that is
//! centralized in the client. Paths, query strings, and JSON bodies come from pure helpers
//! so the wire shapes are unit-testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use super::http::{ApiError, Method, request_empty, request_json};
use super::types::{
    DashboardStats, Paginated, PlatformConnection, PublishJob, Series, SeriesCreateInput,
    SeriesStats, TokenResponse, User, Video, VideoStatus,
};

// =============================================================
// Auth
// =============================================================

fn login_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

fn register_body(email: &str, password: &str, full_name: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password, "full_name": full_name })
}

/// Exchange credentials for a token pair via `POST /auth/login`.
///
/// # Errors
///
/// `ApiError::Status` with the server's `detail` on rejected credentials.
pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    request_json(Method::Post, "/auth/login", Some(login_body(email, password))).await
}

/// Create an account and receive a token pair via `POST /auth/register`.
///
/// # Errors
///
/// `ApiError::Status` with the server's `detail` on validation failure.
pub async fn register(
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<TokenResponse, ApiError> {
    request_json(
        Method::Post,
        "/auth/register",
        Some(register_body(email, password, full_name)),
    )
    .await
}

// =============================================================
// Users
// =============================================================

/// Profile fields the account owner may change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Fetch the signed-in user's profile.
///
/// # Errors
///
/// `ApiError::Unauthorized` once 401 recovery is exhausted.
pub async fn fetch_me() -> Result<User, ApiError> {
    request_json(Method::Get, "/users/me", None).await
}

/// Patch the signed-in user's profile.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_me(update: &ProfileUpdate) -> Result<User, ApiError> {
    let body = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
    request_json(Method::Patch, "/users/me", Some(body)).await
}

/// Permanently delete the signed-in account.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_me() -> Result<(), ApiError> {
    request_empty(Method::Delete, "/users/me", None).await
}

// =============================================================
// Series
// =============================================================

fn series_list_path(page: i64, page_size: i64) -> String {
    format!("/series?page={page}&page_size={page_size}")
}

fn series_path(id: &str) -> String {
    format!("/series/{id}")
}

/// List the user's series, newest first.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_series(page: i64, page_size: i64) -> Result<Paginated<Series>, ApiError> {
    request_json(Method::Get, &series_list_path(page, page_size), None).await
}

/// Fetch one series by id.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_series(id: &str) -> Result<Series, ApiError> {
    request_json(Method::Get, &series_path(id), None).await
}

/// Create a series.
///
/// # Errors
///
/// `ApiError::Status` carries quota and validation messages verbatim.
pub async fn create_series(input: &SeriesCreateInput) -> Result<Series, ApiError> {
    let body = serde_json::to_value(input).map_err(|e| ApiError::Decode(e.to_string()))?;
    request_json(Method::Post, "/series", Some(body)).await
}

/// Update fields of a series.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn update_series(id: &str, input: &SeriesCreateInput) -> Result<Series, ApiError> {
    let body = serde_json::to_value(input).map_err(|e| ApiError::Decode(e.to_string()))?;
    request_json(Method::Patch, &series_path(id), Some(body)).await
}

/// Delete a series and its episodes.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_series(id: &str) -> Result<(), ApiError> {
    request_empty(Method::Delete, &series_path(id), None).await
}

// =============================================================
// Videos
// =============================================================

/// Filters for the video list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoListParams {
    pub series_id: Option<String>,
    pub status_filter: Option<VideoStatus>,
    pub page: Option<i64>,
}

fn videos_list_path(params: &VideoListParams) -> String {
    let mut query = Vec::new();
    if let Some(series_id) = &params.series_id {
        query.push(format!("series_id={series_id}"));
    }
    if let Some(status) = params.status_filter {
        query.push(format!("status_filter={}", status.as_query()));
    }
    if let Some(page) = params.page {
        query.push(format!("page={page}"));
    }
    if query.is_empty() {
        "/videos".to_owned()
    } else {
        format!("/videos?{}", query.join("&"))
    }
}

fn video_path(id: &str) -> String {
    format!("/videos/{id}")
}

fn approve_path(id: &str) -> String {
    format!("/videos/{id}/approve")
}

fn regenerate_path(id: &str) -> String {
    format!("/videos/{id}/regenerate")
}

fn generate_body(series_id: &str, custom_topic: Option<&str>) -> serde_json::Value {
    let mut body = serde_json::json!({ "series_id": series_id });
    if let Some(topic) = custom_topic {
        body["custom_topic"] = serde_json::Value::String(topic.to_owned());
    }
    body
}

fn approve_body(channels: &[String], scheduled_publish_at: Option<&str>) -> serde_json::Value {
    let mut body = serde_json::json!({ "publish_channels": channels });
    if let Some(at) = scheduled_publish_at {
        body["scheduled_publish_at"] = serde_json::Value::String(at.to_owned());
    }
    body
}

/// List videos matching the given filters.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_videos(params: &VideoListParams) -> Result<Paginated<Video>, ApiError> {
    request_json(Method::Get, &videos_list_path(params), None).await
}

/// Fetch one video by id.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_video(id: &str) -> Result<Video, ApiError> {
    request_json(Method::Get, &video_path(id), None).await
}

/// Kick off generation of the next episode for a series.
///
/// # Errors
///
/// `ApiError::Status` carries the quota-exceeded message verbatim.
pub async fn generate_video(
    series_id: &str,
    custom_topic: Option<&str>,
) -> Result<Video, ApiError> {
    request_json(
        Method::Post,
        "/videos/generate",
        Some(generate_body(series_id, custom_topic)),
    )
    .await
}

/// Approve a reviewed video for publication. This submits intent; the
/// status transition itself is server-driven.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn approve_video(
    id: &str,
    channels: &[String],
    scheduled_publish_at: Option<&str>,
) -> Result<Video, ApiError> {
    request_json(
        Method::Post,
        &approve_path(id),
        Some(approve_body(channels, scheduled_publish_at)),
    )
    .await
}

/// Re-run the pipeline for a failed video.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn regenerate_video(id: &str) -> Result<Video, ApiError> {
    request_json(Method::Post, &regenerate_path(id), None).await
}

// =============================================================
// Analytics
// =============================================================

/// Account-wide aggregates for the dashboard overview.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    request_json(Method::Get, "/analytics/dashboard", None).await
}

/// Per-series analytics rows.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn series_stats() -> Result<Vec<SeriesStats>, ApiError> {
    request_json(Method::Get, "/analytics/series", None).await
}

// =============================================================
// Publishing
// =============================================================

fn connection_path(id: &str) -> String {
    format!("/publishing/connections/{id}")
}

fn jobs_path(video_id: Option<&str>) -> String {
    match video_id {
        Some(id) => format!("/publishing/jobs?video_id={id}"),
        None => "/publishing/jobs".to_owned(),
    }
}

fn connect_body(platform: &str, auth_code: &str, redirect_uri: &str) -> serde_json::Value {
    serde_json::json!({
        "platform": platform,
        "auth_code": auth_code,
        "redirect_uri": redirect_uri,
    })
}

/// List the user's linked publishing accounts.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_connections() -> Result<Vec<PlatformConnection>, ApiError> {
    request_json(Method::Get, "/publishing/connections", None).await
}

/// Complete an OAuth hand-off and link a platform account.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn connect_platform(
    platform: &str,
    auth_code: &str,
    redirect_uri: &str,
) -> Result<PlatformConnection, ApiError> {
    request_json(
        Method::Post,
        "/publishing/connections",
        Some(connect_body(platform, auth_code, redirect_uri)),
    )
    .await
}

/// Unlink a platform account.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn disconnect_platform(connection_id: &str) -> Result<(), ApiError> {
    request_empty(Method::Delete, &connection_path(connection_id), None).await
}

/// List publish jobs, optionally narrowed to one video.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn list_publish_jobs(video_id: Option<&str>) -> Result<Vec<PublishJob>, ApiError> {
    request_json(Method::Get, &jobs_path(video_id), None).await
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod analytics;
pub mod auth;
pub mod connections;
pub mod dashboard;
pub mod series;
pub mod settings;
pub mod videos;

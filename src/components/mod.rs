//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared widgets while reading
//! shared state from Leptos context providers.

pub mod layout;
pub mod quota_bar;
pub mod sidebar;
pub mod stat_card;
pub mod status_badge;
pub mod toast_host;

//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the signed-in identity lifecycle; `toast` holds the
//! transient notification queue. Both are provided as `RwSignal`s at the
//! application root.

pub mod session;
pub mod toast;

//! Networking modules for the AutoShorts REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the authenticated client and the 401 refresh protocol,
//! `api` exposes typed endpoint wrappers, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod http;
pub mod types;

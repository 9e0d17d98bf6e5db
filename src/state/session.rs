//! Session store: single source of truth for "who is signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides `SessionState` as an `RwSignal` context; route guards and
//! user-aware components read it, and pages apply the states returned by the
//! operations below. The operations are written against [`SessionBackend`]
//! so tests construct a session per run with a fake backend instead of
//! touching a process-wide singleton.
//!
//! INVARIANT
//! =========
//! `is_authenticated` is true iff the most recent profile fetch succeeded
//! with the currently held token. Token presence alone never authenticates.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::http::ApiError;
use crate::net::types::{TokenResponse, User};

/// Auth-session state for the current browser user.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// True until `initialize` resolves; the app shell gates rendering on it.
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

impl SessionState {
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
        }
    }
}

/// Seam between session logic and the network/storage environment.
// Futures here never cross threads; the wasm runtime is single-threaded.
#[allow(async_fn_in_trait)]
pub trait SessionBackend {
    /// `POST /auth/login`.
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError>;
    /// `POST /auth/register`.
    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<TokenResponse, ApiError>;
    /// `GET /users/me` with the currently held token.
    async fn fetch_me(&self) -> Result<User, ApiError>;
    /// Persist a freshly issued pair (memory + durable storage, atomically).
    fn store_tokens(&self, access: &str, refresh: &str);
    /// Drop the held pair everywhere.
    fn clear_tokens(&self);
    /// Restore a persisted pair into memory; reports whether one existed.
    fn restore_tokens(&self) -> bool;
}

/// Production backend wired to `net::api` and the client token cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

impl SessionBackend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        crate::net::api::login(email, password).await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<TokenResponse, ApiError> {
        crate::net::api::register(email, password, full_name).await
    }

    async fn fetch_me(&self) -> Result<User, ApiError> {
        crate::net::api::fetch_me().await
    }

    fn store_tokens(&self, access: &str, refresh: &str) {
        crate::net::http::set_tokens(crate::net::http::TokenPair {
            access: access.to_owned(),
            refresh: refresh.to_owned(),
        });
    }

    fn clear_tokens(&self) {
        crate::net::http::clear_tokens();
    }

    fn restore_tokens(&self) -> bool {
        crate::net::http::load_persisted_tokens()
    }
}

/// Authenticate with credentials, store the issued pair, and fetch the
/// profile. Errors propagate so the caller can surface the server message.
///
/// # Errors
///
/// `ApiError` from either the login call or the profile fetch.
pub async fn login(
    backend: &impl SessionBackend,
    email: &str,
    password: &str,
) -> Result<SessionState, ApiError> {
    let tokens = backend.login(email, password).await?;
    backend.store_tokens(&tokens.access_token, &tokens.refresh_token);
    let user = backend.fetch_me().await?;
    Ok(SessionState::authenticated(user))
}

/// Same contract as [`login`], against the registration endpoint.
///
/// # Errors
///
/// `ApiError` from either the registration call or the profile fetch.
pub async fn register(
    backend: &impl SessionBackend,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<SessionState, ApiError> {
    let tokens = backend.register(email, password, full_name).await?;
    backend.store_tokens(&tokens.access_token, &tokens.refresh_token);
    let user = backend.fetch_me().await?;
    Ok(SessionState::authenticated(user))
}

/// Clear the held pair and return the signed-out state. Purely local and
/// idempotent; no network call.
pub fn logout(backend: &impl SessionBackend) -> SessionState {
    backend.clear_tokens();
    SessionState::signed_out()
}

/// Re-read the profile with the current token. Any failure resolves to the
/// signed-out state instead of erroring, so callers may treat this as a
/// safe sync operation.
pub async fn fetch_user(backend: &impl SessionBackend) -> SessionState {
    match backend.fetch_me().await {
        Ok(user) => SessionState::authenticated(user),
        Err(_) => SessionState::signed_out(),
    }
}

/// Restore a persisted session at startup. With no persisted pair this
/// resolves straight to signed-out without issuing a profile request.
/// Always resolves, so the shell can gate rendering on completion.
pub async fn initialize(backend: &impl SessionBackend) -> SessionState {
    if !backend.restore_tokens() {
        return SessionState::signed_out();
    }
    fetch_user(backend).await
}

//! Authenticated HTTP client with transparent one-shot token refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every typed request builder in `net::api` funnels through `request_json`,
//! so bearer decoration and 401 recovery live in exactly one place. The
//! recovery contract: a first 401 with a refresh token held triggers a
//! single refresh call and one replay of the original request; a 401 on the
//! replay fails immediately. A 401 with no refresh token held is the
//! signed-out case (wrong credentials on the auth endpoints included) and
//! passes through with the server's message like any other failure.
//! Concurrent 401s share one in-flight refresh future instead of racing
//! independent refresh calls, which would invalidate each other's refresh
//! token under rotation.
//!
//! ERROR HANDLING
//! ==============
//! Non-401 failures pass through unmodified as `ApiError::Status` carrying
//! the server's `detail` message when one is present. Only an unrecoverable
//! refresh failure tears the session down and navigates to `/auth`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::util::storage;

/// Access/refresh credential pair held for the running page session.
///
/// The pair is only ever written or cleared as a unit; a request reads it
/// once while building headers, so no request observes a half-updated pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

thread_local! {
    static TOKENS: RefCell<Option<TokenPair>> = const { RefCell::new(None) };
}

/// Store a new token pair in memory and in durable browser storage.
pub fn set_tokens(pair: TokenPair) {
    storage::persist_tokens(&pair);
    TOKENS.with(|cell| *cell.borrow_mut() = Some(pair));
}

/// Drop the token pair from memory and durable storage. Idempotent.
pub fn clear_tokens() {
    storage::clear_tokens();
    TOKENS.with(|cell| *cell.borrow_mut() = None);
}

/// Restore a previously persisted token pair into memory, if one exists.
/// Returns whether a pair was found.
pub fn load_persisted_tokens() -> bool {
    match storage::read_tokens() {
        Some(pair) => {
            TOKENS.with(|cell| *cell.borrow_mut() = Some(pair));
            true
        }
        None => false,
    }
}

/// Current access token, if a session is held.
pub fn access_token() -> Option<String> {
    TOKENS.with(|cell| cell.borrow().as_ref().map(|p| p.access.clone()))
}

/// Current refresh token, if a session is held.
pub fn refresh_token() -> Option<String> {
    TOKENS.with(|cell| cell.borrow().as_ref().map(|p| p.refresh.clone()))
}

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure; the request may never have reached the server.
    #[error("network error: {0}")]
    Network(String),
    /// Non-401 HTTP failure with the server's `detail` message when decodable.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Unrecoverable 401: the replay was rejected or the refresh failed.
    #[error("session expired")]
    Unauthorized,
    /// The response body did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Requests are browser-only; server rendering never performs I/O.
    #[error("not available during server rendering")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for direct display in a toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => {
                "Request failed. Please try again.".to_owned()
            }
        }
    }
}

/// How to proceed after receiving a response during the retry loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Recovery {
    /// Hand the response to the caller as-is. Covers every non-401 and the
    /// signed-out 401, so a credential rejection keeps its server message.
    PassThrough,
    /// First 401 with a refresh token held: refresh once and replay once.
    RefreshAndReplay,
    /// 401 on the replayed request: fail without another refresh.
    SessionExpired,
}

pub(crate) fn classify_unauthorized(status: u16, replayed: bool, refresh_held: bool) -> Recovery {
    if status != 401 {
        return Recovery::PassThrough;
    }
    if replayed {
        return Recovery::SessionExpired;
    }
    if refresh_held {
        return Recovery::RefreshAndReplay;
    }
    // No session to recover; the server's rejection reaches the caller.
    Recovery::PassThrough
}

/// `Authorization` header value for the held access token, if any.
pub(crate) fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

const API_PREFIX: &str = "/api/v1";

/// Full request URL for an API path. The backend origin comes from the
/// `API_BASE_URL` compile-time override and defaults to same-origin.
pub(crate) fn api_url(path: &str) -> String {
    let base = option_env!("API_BASE_URL").unwrap_or("");
    format!("{base}{API_PREFIX}{path}")
}

/// HTTP methods used by the typed API surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Seam between the retry protocol and the transport environment, so the
/// refresh-and-replay loop runs under tests with a scripted transport.
// Futures here never cross threads; the wasm runtime is single-threaded.
#[allow(async_fn_in_trait)]
pub(crate) trait Transport {
    type Response;

    fn status(resp: &Self::Response) -> u16;
    fn is_success(resp: &Self::Response) -> bool;
    /// Whether a refresh token is currently held.
    fn refresh_token_held(&self) -> bool;
    /// One wire attempt, bearer decoration included.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Self::Response, ApiError>;
    /// Run the refresh protocol once; `Err` means the session is gone.
    async fn refresh(&self) -> Result<(), ()>;
    /// Decode a failed response into the error surfaced to the caller.
    async fn into_error(resp: Self::Response) -> ApiError;
}

/// The 401 recovery loop: returns the first pass-through response, the
/// replay's response, or an error. At most one refresh per call.
pub(crate) async fn send_with_refresh<T: Transport>(
    transport: &T,
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<T::Response, ApiError> {
    let mut replayed = false;
    loop {
        let resp = transport.send(method, path, body).await?;
        match classify_unauthorized(T::status(&resp), replayed, transport.refresh_token_held()) {
            Recovery::PassThrough => {
                if T::is_success(&resp) {
                    return Ok(resp);
                }
                return Err(T::into_error(resp).await);
            }
            Recovery::SessionExpired => return Err(ApiError::Unauthorized),
            Recovery::RefreshAndReplay => {
                if transport.refresh().await.is_err() {
                    return Err(ApiError::Unauthorized);
                }
                replayed = true;
            }
        }
    }
}

/// Issue a request and decode the JSON response body.
///
/// # Errors
///
/// See [`ApiError`]; 401 recovery is applied before any error is returned.
pub(crate) async fn request_json<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = browser::dispatch(method, path, body.as_ref()).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

/// Issue a request and discard the response body.
///
/// # Errors
///
/// See [`ApiError`].
pub(crate) async fn request_empty(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::dispatch(method, path, body.as_ref()).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;

    use futures::FutureExt as _;
    use futures::future::{LocalBoxFuture, Shared};
    use gloo_net::http::{Request, RequestBuilder, Response};

    use super::{ApiError, Method, TokenPair, Transport, api_url};
    use crate::net::types::{ApiErrorBody, TokenResponse};

    type RefreshFuture = Shared<LocalBoxFuture<'static, Result<(), String>>>;

    thread_local! {
        static REFRESH_IN_FLIGHT: RefCell<Option<RefreshFuture>> = const { RefCell::new(None) };
    }

    /// Production transport over gloo-net and the client token cell.
    struct GlooTransport;

    impl Transport for GlooTransport {
        type Response = Response;

        fn status(resp: &Response) -> u16 {
            resp.status()
        }

        fn is_success(resp: &Response) -> bool {
            resp.ok()
        }

        fn refresh_token_held(&self) -> bool {
            super::refresh_token().is_some()
        }

        async fn send(
            &self,
            method: Method,
            path: &str,
            body: Option<&serde_json::Value>,
        ) -> Result<Response, ApiError> {
            send_once(method, path, body).await
        }

        async fn refresh(&self) -> Result<(), ()> {
            log::warn!("access token rejected; attempting refresh");
            refresh_session().await.map_err(|_| ())
        }

        async fn into_error(resp: Response) -> ApiError {
            error_from_response(&resp).await
        }
    }

    /// Send `method path` with bearer decoration, applying the one-shot
    /// refresh protocol on 401.
    pub(super) async fn dispatch(
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, ApiError> {
        super::send_with_refresh(&GlooTransport, method, path, body).await
    }

    async fn send_once(
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let url = api_url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        // Read the pair once so decoration never mixes an old and new token.
        if let Some(header) = super::bearer_header(super::access_token().as_deref()) {
            builder = builder.header("Authorization", &header);
        }
        let request = attach_body(builder, body)?;
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    fn attach_body(
        builder: RequestBuilder,
        body: Option<&serde_json::Value>,
    ) -> Result<Request, ApiError> {
        match body {
            Some(value) => builder
                .json(value)
                .map_err(|e| ApiError::Decode(e.to_string())),
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string())),
        }
    }

    async fn error_from_response(resp: &Response) -> ApiError {
        let status = resp.status();
        let message = match resp.json::<ApiErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => resp.status_text(),
        };
        ApiError::Status { status, message }
    }

    /// Run the refresh protocol, joining an already in-flight refresh when
    /// one exists so concurrent 401s resolve against a single outcome.
    async fn refresh_session() -> Result<(), String> {
        let (future, created) = REFRESH_IN_FLIGHT.with(|cell| {
            let mut slot = cell.borrow_mut();
            if let Some(existing) = slot.as_ref() {
                (existing.clone(), false)
            } else {
                let future = perform_refresh().boxed_local().shared();
                *slot = Some(future.clone());
                (future, true)
            }
        });
        let outcome = future.await;
        if created {
            REFRESH_IN_FLIGHT.with(|cell| cell.borrow_mut().take());
        }
        outcome
    }

    async fn perform_refresh() -> Result<(), String> {
        let Some(refresh) = super::refresh_token() else {
            return Err("no refresh token held".to_owned());
        };
        let result = exchange_refresh_token(&refresh).await;
        match result {
            Ok(tokens) => {
                super::set_tokens(TokenPair {
                    access: tokens.access_token,
                    refresh: tokens.refresh_token,
                });
                log::info!("token refresh succeeded");
                Ok(())
            }
            Err(e) => {
                log::warn!("token refresh failed: {e}; clearing session");
                super::clear_tokens();
                force_login_redirect();
                Err(e)
            }
        }
    }

    async fn exchange_refresh_token(refresh: &str) -> Result<TokenResponse, String> {
        let payload = serde_json::json!({ "refresh_token": refresh });
        let resp = Request::post(&api_url("/auth/refresh"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("refresh rejected: {}", resp.status()));
        }
        resp.json::<TokenResponse>().await.map_err(|e| e.to_string())
    }

    fn force_login_redirect() {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/auth");
        }
    }
}
